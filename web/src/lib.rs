//! Layout shell and starter pages for ForgeKit.
//!
//! Components here are rendered to plain HTML strings on the server; there is
//! no hydration step and no client-side state. The API binary serves the
//! documents produced by [`home_page`] and [`users_page`].

pub mod components;
pub mod pages;

use leptos::prelude::*;

use components::AppShell;
use pages::{HomePage, UsersPage};

/// The landing page as a complete HTML document.
pub fn home_page() -> String {
    document("ForgeKit", view! { <HomePage /> }.into_any())
}

/// The users starter page as a complete HTML document.
pub fn users_page() -> String {
    document("Users | ForgeKit", view! { <UsersPage /> }.into_any())
}

/// Wraps content in the layout shell and a minimal document head.
fn document(title: &str, content: AnyView) -> String {
    let title = title.to_owned();
    let html = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
            </head>
            <body>
                <AppShell>{content}</AppShell>
            </body>
        </html>
    }
    .to_html();

    format!("<!DOCTYPE html>{html}")
}
