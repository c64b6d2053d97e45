//! Search Box Component
//!
//! Free-text search input with a clear button. The raw value propagates on
//! every keystroke; pages debounce before fetching.

use leptos::prelude::*;

#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] placeholder: String,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-box">
            <input
                type="text"
                class="search-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-clear" on:click=move |_| on_change.run(String::new())>
                    "×"
                </button>
            </Show>
        </div>
    }
}
