//! Reminder Form Component
//!
//! Modal form for creating/editing a reminder, optionally linked to a
//! client and/or project.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, clients::ClientListQuery, projects::ProjectListQuery, use_api};
use crate::components::{CheckboxField, SelectField, TextField, TextareaField};
use crate::format::date_input_value;
use crate::models::{Client, Project, Reminder};

/// Owned form state handed back to the page on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub completed: bool,
    pub client_id: String,
    pub project_id: String,
}

impl ReminderDraft {
    fn from_reminder(reminder: &Reminder) -> Self {
        Self {
            title: reminder.title.clone(),
            description: reminder.description.clone().unwrap_or_default(),
            due_date: date_input_value(&reminder.due_date),
            completed: reminder.completed,
            client_id: reminder.client_id.clone().unwrap_or_default(),
            project_id: reminder.project_id.clone().unwrap_or_default(),
        }
    }
}

#[component]
pub fn ReminderForm(
    initial: Option<Reminder>,
    #[prop(into)] is_submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<ReminderDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let draft = RwSignal::new(
        initial
            .as_ref()
            .map(ReminderDraft::from_reminder)
            .unwrap_or_default(),
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
                        &format!("[ReminderForm] Failed to load clients: {}", err).into(),
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
                        &format!("[ReminderForm] Failed to load projects: {}", err).into(),
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

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        if current.title.is_empty() || current.due_date.is_empty() {
            return;
        }
        on_submit.run(current);
    };

    view! {
        <form class="entity-form" on:submit=submit>
            <TextField
                label="Title"
                required=true
                value=Signal::derive(move || draft.with(|d| d.title.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.title = v))
            />
            <TextField
                label="Due date"
                required=true
                input_type="date"
                value=Signal::derive(move || draft.with(|d| d.due_date.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.due_date = v))
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
                label="Description"
                value=Signal::derive(move || draft.with(|d| d.description.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.description = v))
            />
            <CheckboxField
                label="Completed"
                checked=Signal::derive(move || draft.with(|d| d.completed))
                on_toggle=Callback::new(move |v| draft.update(|d| d.completed = v))
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
