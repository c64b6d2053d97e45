//! Clientele Frontend App
//!
//! Root component: wires up the session store, theme, toast stack and API
//! client, restores a persisted session, and switches between the auth
//! views and the private shell.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClient, BASE_URL};
use crate::components::{Navbar, Route, Sidebar, ToastStack};
use crate::notify::provide_toasts;
use crate::pages::{
    ClientsPage, DashboardPage, InteractionsPage, LoginPage, ProjectsPage, RegisterPage,
    RemindersPage,
};
use crate::session::{
    persisted_token, session_clear, session_restore, Session, SessionStore, SessionStoreFields,
};
use crate::theme::provide_theme;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthView {
    Login,
    Register,
}

#[component]
pub fn App() -> impl IntoView {
    let session = SessionStore::new(Session::default());
    provide_context(session);
    provide_theme();
    provide_toasts();
    let api = ApiClient::new(BASE_URL, session);
    provide_context(api.clone());

    let (route, set_route) = signal(Route::Dashboard);
    let (auth_view, set_auth_view) = signal(AuthView::Login);

    // A token from a previous visit is only trusted once the profile
    // endpoint accepts it; anything else gets purged.
    if let Some(token) = persisted_token() {
        *session.restoring().write() = true;
        *session.token().write() = Some(token.clone());
        let api = api.clone();
        spawn_local(async move {
            match api::auth::profile(&api).await {
                Ok(resp) => session_restore(&session, resp.user, token),
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[App] Stored session rejected: {}", err).into(),
                    );
                    session_clear(&session);
                }
            }
            *session.restoring().write() = false;
        });
    }

    let on_logout = Callback::new(move |_: ()| {
        let api = api.clone();
        spawn_local(async move {
            if let Err(err) = api::auth::logout(&api).await {
                web_sys::console::warn_1(&format!("[App] Logout request failed: {}", err).into());
            }
            session_clear(&session);
        });
        set_route.set(Route::Dashboard);
        set_auth_view.set(AuthView::Login);
    });

    view! {
        <ToastStack />
        {move || {
            if session.restoring().get() {
                view! { <div class="app-splash">"Loading..."</div> }.into_any()
            } else if session.user().get().is_some() {
                view! {
                    <div class="app-shell">
                        <Sidebar current=route set_current=set_route />
                        <div class="app-main">
                            <Navbar on_logout=on_logout />
                            <main class="app-content">
                                {move || match route.get() {
                                    Route::Dashboard => view! { <DashboardPage /> }.into_any(),
                                    Route::Clients => view! { <ClientsPage /> }.into_any(),
                                    Route::Projects => view! { <ProjectsPage /> }.into_any(),
                                    Route::Interactions => {
                                        view! { <InteractionsPage /> }.into_any()
                                    }
                                    Route::Reminders => view! { <RemindersPage /> }.into_any(),
                                }}
                            </main>
                        </div>
                    </div>
                }
                .into_any()
            } else {
                match auth_view.get() {
                    AuthView::Login => view! {
                        <LoginPage on_switch_to_register=Callback::new(move |_| {
                            set_auth_view.set(AuthView::Register)
                        }) />
                    }
                    .into_any(),
                    AuthView::Register => view! {
                        <RegisterPage on_switch_to_login=Callback::new(move |_| {
                            set_auth_view.set(AuthView::Login)
                        }) />
                    }
                    .into_any(),
                }
            }
        }}
    }
}
