//! Form Field Components
//!
//! Shared labeled inputs used by every entity form.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] required: bool,
    /// HTML input type; defaults to "text".
    #[prop(into, optional)] input_type: String,
    #[prop(into, optional)] placeholder: String,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };
    view! {
        <label class="field">
            <span class="field-label">
                {label}
                {required.then(|| view! { <span class="field-required">"*"</span> })}
            </span>
            <input
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    /// (wire value, display label) pairs.
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    /// Label for a leading empty option; no empty option when blank.
    #[prop(into, optional)] empty_label: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">
                {label}
                {required.then(|| view! { <span class="field-required">"*"</span> })}
            </span>
            <select
                required=required
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {(!empty_label.is_empty()).then(|| view! {
                    <option value="" selected=move || value.get().is_empty()>
                        {empty_label.clone()}
                    </option>
                })}
                {move || options.get().into_iter().map(|(option_value, text)| {
                    let attr_value = option_value.clone();
                    view! {
                        <option
                            value=attr_value
                            selected=move || value.get() == option_value
                        >
                            {text}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn TextareaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, optional)] placeholder: String,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <textarea
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="field checkbox-field">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span class="field-label">{label}</span>
        </label>
    }
}
