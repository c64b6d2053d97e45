//! Project Form Component
//!
//! Modal form for creating/editing a project. Loads the client list on
//! mount for the owning-client dropdown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, clients::ClientListQuery, use_api};
use crate::components::{SelectField, TextField, TextareaField};
use crate::format::date_input_value;
use crate::models::{Client, Project, ProjectStatus};

/// Owned form state handed back to the page on submit. Budget stays a raw
/// string until submit so partial keystrokes never get rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub client_id: String,
    pub status: ProjectStatus,
    pub budget: String,
    pub deadline: String,
}

impl ProjectDraft {
    fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone().unwrap_or_default(),
            client_id: project.client_id.clone(),
            status: project.status,
            budget: project.budget.map(|b| b.to_string()).unwrap_or_default(),
            deadline: project
                .deadline
                .as_deref()
                .map(date_input_value)
                .unwrap_or_default(),
        }
    }

    fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            client_id: String::new(),
            status: ProjectStatus::NotStarted,
            budget: String::new(),
            deadline: String::new(),
        }
    }

    /// Parsed budget; junk input counts as unset.
    pub fn budget_value(&self) -> Option<f64> {
        self.budget.trim().parse().ok()
    }
}

#[component]
pub fn ProjectForm(
    initial: Option<Project>,
    #[prop(into)] is_submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<ProjectDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let draft = RwSignal::new(
        initial
            .as_ref()
            .map(ProjectDraft::from_project)
            .unwrap_or_else(ProjectDraft::blank),
    );

    // Clients for the owner dropdown.
    let (clients, set_clients) = signal(Vec::<Client>::new());
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let query = ClientListQuery {
                page: 1,
                limit: 100,
                ..Default::default()
            };
            match api::clients::list(&api, &query).await {
                Ok(resp) => {
                    let _ = set_clients.try_set(resp.items);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[ProjectForm] Failed to load clients: {}", err).into(),
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
    let status_options: Vec<(String, String)> = ProjectStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        if current.title.is_empty() || current.client_id.is_empty() {
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
            <SelectField
                label="Client"
                required=true
                empty_label="Select a client"
                value=Signal::derive(move || draft.with(|d| d.client_id.clone()))
                on_change=Callback::new(move |v| draft.update(|d| d.client_id = v))
                options=client_options
            />
            <SelectField
                label="Status"
                value=Signal::derive(move || draft.with(|d| d.status.as_str().to_string()))
                on_change=Callback::new(move |v: String| {
                    if let Some(status) = ProjectStatus::parse(&v) {
                        draft.update(|d| d.status = status);
                    }
                })
                options=status_options
            />
            <TextField
                label="Budget"
                input_type="number"
                placeholder="0.00"
                value=Signal::derive(move || draft.with(|d| d.budget.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.budget = v))
            />
            <TextField
                label="Deadline"
                input_type="date"
                value=Signal::derive(move || draft.with(|d| d.deadline.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.deadline = v))
            />
            <TextareaField
                label="Description"
                value=Signal::derive(move || draft.with(|d| d.description.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.description = v))
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
