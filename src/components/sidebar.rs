//! Sidebar Component
//!
//! App navigation. Routing is a plain signal switch, so `Route` lives here
//! alongside the control that drives it.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Clients,
    Projects,
    Interactions,
    Reminders,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Clients,
        Route::Projects,
        Route::Interactions,
        Route::Reminders,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Clients => "Clients",
            Route::Projects => "Projects",
            Route::Interactions => "Interactions",
            Route::Reminders => "Reminders",
        }
    }
}

#[component]
pub fn Sidebar(
    current: ReadSignal<Route>,
    set_current: WriteSignal<Route>,
) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"Clientele"</div>
            <nav class="sidebar-nav">
                {Route::ALL
                    .iter()
                    .map(|route| {
                        let route = *route;
                        let is_active = move || current.get() == route;
                        view! {
                            <button
                                class=move || {
                                    if is_active() { "nav-link active" } else { "nav-link" }
                                }
                                on:click=move |_| set_current.set(route)
                            >
                                {route.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
