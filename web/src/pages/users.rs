use leptos::prelude::*;

/// Placeholder for the users area. The page itself is public; the data lives
/// behind `/api/users`, which requires a bearer token.
#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <section>
            <h1 class="text-2xl font-semibold">"Users"</h1>
            <p class="mt-4">
                "Sign in and call " <code>"/api/users"</code> " to list accounts."
            </p>
        </section>
    }
}
