//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, auth::RegisterPayload, use_api};
use crate::notify::use_toasts;
use crate::session::{session_sign_in, use_session};

#[component]
pub fn RegisterPage(#[prop(into)] on_switch_to_login: Callback<()>) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let first_name = first_name.get();
        let last_name = last_name.get();
        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            return;
        }
        if password != confirm.get() {
            toasts.error("Registration failed", "Passwords do not match");
            return;
        }
        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            let payload = RegisterPayload {
                first_name: &first_name,
                last_name: &last_name,
                email: &email,
                password: &password,
            };
            match api::auth::register(&api, &payload).await {
                Ok(resp) => {
                    toasts.success("Account created");
                    session_sign_in(&session, resp.user, resp.token);
                }
                Err(err) => toasts.error("Registration failed", err.to_string()),
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h1 class="auth-brand">"Clientele"</h1>
                <h2>"Create an account"</h2>
                <label class="field">
                    <span class="field-label">"First name"</span>
                    <input
                        type="text"
                        required=true
                        prop:value=move || first_name.get()
                        on:input=move |ev| set_first_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Last name"</span>
                    <input
                        type="text"
                        required=true
                        prop:value=move || last_name.get()
                        on:input=move |ev| set_last_name.set(event_target_value(&ev))
                    />
                </label>
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
                <label class="field">
                    <span class="field-label">"Confirm password"</span>
                    <input
                        type="password"
                        required=true
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="submit-btn" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Creating..." } else { "Create account" }}
                </button>
                <p class="auth-switch">
                    "Already registered? "
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| on_switch_to_login.run(())
                    >
                        "Sign in"
                    </button>
                </p>
            </form>
        </div>
    }
}
