//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, auth::LoginPayload, use_api};
use crate::notify::use_toasts;
use crate::session::{session_sign_in, use_session};

#[component]
pub fn LoginPage(#[prop(into)] on_switch_to_register: Callback<()>) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            return;
        }
        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            let payload = LoginPayload {
                email: &email,
                password: &password,
            };
            match api::auth::login(&api, &payload).await {
                Ok(resp) => {
                    toasts.success("Signed in");
                    session_sign_in(&session, resp.user, resp.token);
                }
                Err(err) => toasts.error("Login failed", err.to_string()),
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h1 class="auth-brand">"Clientele"</h1>
                <h2>"Sign in"</h2>
                <label class="field">
                    <span class="field-label">"Email"</span>
                    <input
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Password"</span>
                    <input
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="submit-btn" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-switch">
                    "No account? "
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| on_switch_to_register.run(())
                    >
                        "Register"
                    </button>
                </p>
            </form>
        </div>
    }
}
