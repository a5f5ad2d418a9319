//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup so pages can focus on content.

use leptos::prelude::*;

/// Wraps page content with the fixed header and the main content container.
/// The header carries the brand mark and the two navigation links.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <span class="font-semibold whitespace-nowrap dark:text-white">"ForgeKit"</span>
                    <nav>
                        <ul class="font-medium flex flex-row space-x-8">
                            <li>
                                <a
                                    href="/"
                                    class="block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:p-0 dark:text-white"
                                >
                                    "Home"
                                </a>
                            </li>
                            <li>
                                <a
                                    href="/users"
                                    class="block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:p-0 dark:text-white"
                                >
                                    "Users"
                                </a>
                            </li>
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
