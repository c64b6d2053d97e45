//! Client Form Component
//!
//! Modal form for creating/editing a client.

use leptos::prelude::*;

use crate::components::{SelectField, TextField, TextareaField};
use crate::models::Client;

/// Owned form state handed back to the page on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub notes: String,
    pub status: String,
}

impl ClientDraft {
    fn from_client(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            company: client.company.clone().unwrap_or_default(),
            notes: client.notes.clone().unwrap_or_default(),
            status: client.status.clone().unwrap_or_else(|| "Active".to_string()),
        }
    }

    fn blank() -> Self {
        Self {
            status: "Active".to_string(),
            ..Default::default()
        }
    }
}

#[component]
pub fn ClientForm(
    initial: Option<Client>,
    #[prop(into)] is_submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<ClientDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(
        initial
            .as_ref()
            .map(ClientDraft::from_client)
            .unwrap_or_else(ClientDraft::blank),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        if current.name.is_empty() || current.email.is_empty() || current.phone.is_empty() {
            return;
        }
        on_submit.run(current);
    };

    let status_options = vec![
        ("Active".to_string(), "Active".to_string()),
        ("Inactive".to_string(), "Inactive".to_string()),
    ];

    view! {
        <form class="entity-form" on:submit=submit>
            <TextField
                label="Name"
                required=true
                value=Signal::derive(move || draft.with(|d| d.name.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.name = v))
            />
            <TextField
                label="Email"
                required=true
                input_type="email"
                value=Signal::derive(move || draft.with(|d| d.email.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.email = v))
            />
            <TextField
                label="Phone"
                required=true
                input_type="tel"
                value=Signal::derive(move || draft.with(|d| d.phone.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.phone = v))
            />
            <TextField
                label="Company"
                value=Signal::derive(move || draft.with(|d| d.company.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.company = v))
            />
            <SelectField
                label="Status"
                value=Signal::derive(move || draft.with(|d| d.status.clone()))
                on_change=Callback::new(move |v| draft.update(|d| d.status = v))
                options=status_options
            />
            <TextareaField
                label="Notes"
                value=Signal::derive(move || draft.with(|d| d.notes.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.notes = v))
            />
            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="submit-btn" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}
