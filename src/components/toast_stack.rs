//! Toast Stack Component
//!
//! Fixed overlay rendering the toast side channel; click dismisses early.

use leptos::prelude::*;

use crate::notify::{use_toasts, ToastKind};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.list().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            <span class="toast-title">{toast.title.clone()}</span>
                            {toast
                                .detail
                                .clone()
                                .map(|detail| view! { <span class="toast-detail">{detail}</span> })}
                        </div>
                    }
                }
            />
        </div>
    }
}
