//! Navbar Component
//!
//! Top bar of the private shell: signed-in user, theme toggle, sign out.

use leptos::prelude::*;

use crate::session::{use_session, SessionStoreFields};
use crate::theme::{use_theme, Theme};

#[component]
pub fn Navbar(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let session = use_session();
    let theme = use_theme();

    view! {
        <header class="navbar">
            <span class="navbar-user">
                {move || {
                    session.user().get().map(|u| u.display_name()).unwrap_or_default()
                }}
            </span>
            <div class="navbar-actions">
                <button
                    class="theme-toggle"
                    title="Toggle theme"
                    on:click=move |_| theme.toggle()
                >
                    {move || match theme.theme().get() {
                        Theme::Light => "🌙",
                        Theme::Dark => "☀",
                    }}
                </button>
                <button class="logout-btn" on:click=move |_| on_logout.run(())>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
