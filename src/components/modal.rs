//! Modal Dialog Component
//!
//! Backdrop + dialog shell; content is supplied by the caller and rebuilt
//! each time the modal opens, so forms always start from fresh state.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.get()}</h2>
                        <button class="modal-close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
