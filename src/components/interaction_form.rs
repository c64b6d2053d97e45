//! Interaction Form Component
//!
//! Modal form for logging a call/email/meeting against a client or project.
//! Loads both dropdown lists on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, clients::ClientListQuery, projects::ProjectListQuery, use_api};
use crate::components::{SelectField, TextField, TextareaField};
use crate::format::date_input_value;
use crate::models::{Client, Interaction, InteractionType, Project};

/// Owned form state handed back to the page on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionDraft {
    pub date: String,
    pub kind: InteractionType,
    pub notes: String,
    pub client_id: String,
    pub project_id: String,
}

impl InteractionDraft {
    fn from_interaction(interaction: &Interaction) -> Self {
        Self {
            date: date_input_value(&interaction.date),
            kind: interaction.kind,
            notes: interaction.notes.clone().unwrap_or_default(),
            client_id: interaction.client_id.clone().unwrap_or_default(),
            project_id: interaction.project_id.clone().unwrap_or_default(),
        }
    }

    fn blank() -> Self {
        Self {
            date: String::new(),
            kind: InteractionType::Call,
            notes: String::new(),
            client_id: String::new(),
            project_id: String::new(),
        }
    }
}

#[component]
pub fn InteractionForm(
    initial: Option<Interaction>,
    #[prop(into)] is_submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<InteractionDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let draft = RwSignal::new(
        initial
            .as_ref()
            .map(InteractionDraft::from_interaction)
            .unwrap_or_else(InteractionDraft::blank),
    );

    let (clients, set_clients) = signal(Vec::<Client>::new());
    let (projects, set_projects) = signal(Vec::<Project>::new());
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let client_query = ClientListQuery {
                page: 1,
                limit: 100,
                ..Default::default()
            };
            match api::clients::list(&api, &client_query).await {
                Ok(resp) => {
                    let _ = set_clients.try_set(resp.items);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[InteractionForm] Failed to load clients: {}", err).into(),
                    );
                }
            }
            let project_query = ProjectListQuery {
                page: 1,
                limit: 100,
                ..Default::default()
            };
            match api::projects::list(&api, &project_query).await {
                Ok(resp) => {
                    let _ = set_projects.try_set(resp.items);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[InteractionForm] Failed to load projects: {}", err).into(),
                    );
                }
            }
        });
    });

    let client_options = Signal::derive(move || {
        clients
            .get()
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect::<Vec<_>>()
    });
    let project_options = Signal::derive(move || {
        projects
            .get()
            .into_iter()
            .map(|p| (p.id, p.title))
            .collect::<Vec<_>>()
    });
    let kind_options: Vec<(String, String)> = InteractionType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(draft.get());
    };

    view! {
        <form class="entity-form" on:submit=submit>
            <TextField
                label="Date"
                input_type="date"
                value=Signal::derive(move || draft.with(|d| d.date.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.date = v))
            />
            <SelectField
                label="Type"
                required=true
                value=Signal::derive(move || draft.with(|d| d.kind.as_str().to_string()))
                on_change=Callback::new(move |v: String| {
                    if let Some(kind) = InteractionType::parse(&v) {
                        draft.update(|d| d.kind = kind);
                    }
                })
                options=kind_options
            />
            <SelectField
                label="Client"
                empty_label="No client"
                value=Signal::derive(move || draft.with(|d| d.client_id.clone()))
                on_change=Callback::new(move |v| draft.update(|d| d.client_id = v))
                options=client_options
            />
            <SelectField
                label="Project"
                empty_label="No project"
                value=Signal::derive(move || draft.with(|d| d.project_id.clone()))
                on_change=Callback::new(move |v| draft.update(|d| d.project_id = v))
                options=project_options
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
