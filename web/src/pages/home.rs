use leptos::prelude::*;

/// Landing content shown inside the layout shell.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section>
            <h1 class="text-2xl font-semibold">"Welcome to ForgeKit"</h1>
            <p class="mt-4">
                "This is the starter landing page. Replace it with your project."
            </p>
        </section>
    }
}
