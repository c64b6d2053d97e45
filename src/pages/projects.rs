//! Projects Page
//!
//! Same list pattern as clients, with a five-state status filter and
//! budget/deadline formatting in the table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{
    self, non_empty, projects::ProjectListQuery, projects::ProjectPayload, use_api, ApiError,
};
use crate::components::{
    DeleteConfirmButton, Modal, PaginationControls, ProjectDraft, ProjectForm, SearchBox,
};
use crate::debounce::use_debounced;
use crate::format::{format_currency, format_date};
use crate::list::{ListAction, ListState};
use crate::models::{Project, ProjectStatus};
use crate::notify::use_toasts;
use crate::pages::{PAGE_SIZE, SEARCH_DEBOUNCE_MS};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();
    let state = RwSignal::new(ListState::<Project>::new(PAGE_SIZE));
    let dispatch = move |action: ListAction<Project>| {
        let _ = state.try_update(|s| s.apply(action));
    };

    let search_term = Memo::new(move |_| state.with(|s| s.search_term.clone()));
    let debounced_search = use_debounced(search_term.into(), SEARCH_DEBOUNCE_MS);
    let page = Memo::new(move |_| state.with(|s| s.pagination.page));
    let limit = Memo::new(move |_| state.with(|s| s.pagination.limit));
    let status_filter = Memo::new(move |_| state.with(|s| s.filter("status").to_string()));
    let fetch_generation = StoredValue::new(0u64);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let query = ProjectListQuery {
                search: debounced_search.get(),
                status: status_filter.get(),
                page: page.get(),
                limit: limit.get(),
            };
            let generation = fetch_generation
                .try_update_value(|g| {
                    *g += 1;
                    *g
                })
                .unwrap_or(0);
            dispatch(ListAction::FetchStart);
            let api = api.clone();
            spawn_local(async move {
                let result = api::projects::list(&api, &query).await;
                if fetch_generation.try_get_value() != Some(generation) {
                    return;
                }
                match result {
                    Ok(resp) => dispatch(ListAction::FetchSuccess {
                        items: resp.items,
                        pagination: resp.pagination,
                    }),
                    Err(err) => {
                        dispatch(ListAction::FetchError(err.to_string()));
                        if !matches!(err, ApiError::Unauthorized) {
                            toasts.error("Failed to fetch projects", err.to_string());
                        }
                    }
                }
            });
        });
    }

    let on_submit = {
        let api = api.clone();
        Callback::new(move |draft: ProjectDraft| {
            let current = state.with_untracked(|s| s.current.clone());
            dispatch(ListAction::SetSubmitting(true));
            let api = api.clone();
            spawn_local(async move {
                let payload = ProjectPayload {
                    title: &draft.title,
                    description: non_empty(&draft.description),
                    budget: draft.budget_value(),
                    deadline: non_empty(&draft.deadline),
                    status: draft.status,
                    client_id: &draft.client_id,
                };
                let result = match &current {
                    Some(project) => api::projects::update(&api, &project.id, &payload)
                        .await
                        .map(|r| (r.entity, "Project updated successfully")),
                    None => api::projects::create(&api, &payload)
                        .await
                        .map(|r| (r.entity, "Project created successfully")),
                };
                match result {
                    Ok((entity, message)) => {
                        if current.is_some() {
                            dispatch(ListAction::UpdateEntity(entity));
                        } else {
                            dispatch(ListAction::AddEntity(entity));
                        }
                        toasts.success(message);
                    }
                    Err(err) => {
                        dispatch(ListAction::SetSubmitting(false));
                        if !matches!(err, ApiError::Unauthorized) {
                            toasts.error("Operation failed", err.to_string());
                        }
                    }
                }
            });
        })
    };

    let on_delete = Callback::new({
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            spawn_local(async move {
                match api::projects::remove(&api, &id).await {
                    Ok(_) => {
                        dispatch(ListAction::DeleteEntity(id));
                        toasts.success("Project deleted successfully");
                    }
                    Err(err) => {
                        if !matches!(err, ApiError::Unauthorized) {
                            toasts.error("Failed to delete project", err.to_string());
                        }
                    }
                }
            });
        }
    });

    let close_modal = Callback::new(move |_: ()| dispatch(ListAction::ToggleModal(None)));
    let is_modal_open = Signal::derive(move || state.with(|s| s.is_modal_open));
    let is_submitting = Signal::derive(move || state.with(|s| s.is_submitting));
    let is_loading = Signal::derive(move || state.with(|s| s.is_loading));
    let items = Signal::derive(move || state.with(|s| s.items.clone()));
    let pagination = Signal::derive(move || state.with(|s| s.pagination.clone()));
    let modal_title = Signal::derive(move || {
        state.with(|s| {
            if s.current.is_some() {
                "Edit Project".to_string()
            } else {
                "Add New Project".to_string()
            }
        })
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Projects"</h1>
                <button class="add-btn" on:click=move |_| dispatch(ListAction::ToggleModal(None))>
                    "+ Add Project"
                </button>
            </div>

            <div class="list-controls">
                <SearchBox
                    value=Signal::derive(move || search_term.get())
                    placeholder="Search projects..."
                    on_change=Callback::new(move |term| dispatch(ListAction::SetSearchTerm(term)))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| dispatch(ListAction::SetFilter {
                        name: "status",
                        value: event_target_value(&ev),
                    })
                >
                    <option value="">"All Statuses"</option>
                    {ProjectStatus::ALL
                        .iter()
                        .map(|status| {
                            view! { <option value=status.as_str()>{status.label()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|message| view! { <p class="list-error">{message}</p> })
            }}

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <p class="list-empty">"Loading projects..."</p> }
            >
                <Show
                    when=move || !items.get().is_empty()
                    fallback=move || view! {
                        <p class="list-empty">
                            {move || if search_term.get().is_empty() {
                                "No projects found. Add your first project!"
                            } else {
                                "No projects match your search criteria."
                            }}
                        </p>
                    }
                >
                    <table class="entity-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Status"</th>
                                <th>"Budget"</th>
                                <th>"Deadline"</th>
                                <th>"Created"</th>
                                <th class="actions-col">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|project| (project.id.clone(), project.updated_at.clone())
                                children={
                                    let on_delete = on_delete.clone();
                                    move |project| {
                                    let edit_target = project.clone();
                                    let delete_id = project.id.clone();
                                    let on_delete = on_delete.clone();
                                    let status_class = match project.status {
                                        ProjectStatus::Completed => "status-badge completed",
                                        ProjectStatus::InProgress => "status-badge in-progress",
                                        ProjectStatus::OnHold => "status-badge on-hold",
                                        ProjectStatus::Cancelled => "status-badge cancelled",
                                        ProjectStatus::NotStarted => "status-badge not-started",
                                    };
                                    view! {
                                        <tr>
                                            <td class="cell-primary">{project.title.clone()}</td>
                                            <td>
                                                <span class=status_class>{project.status.label()}</span>
                                            </td>
                                            <td>{format_currency(project.budget)}</td>
                                            <td>{format_date(project.deadline.as_deref().unwrap_or(""))}</td>
                                            <td>{format_date(&project.created_at)}</td>
                                            <td class="actions-col">
                                                <button
                                                    class="edit-btn"
                                                    title="Edit"
                                                    on:click=move |_| dispatch(
                                                        ListAction::ToggleModal(Some(edit_target.clone())),
                                                    )
                                                >
                                                    "✎"
                                                </button>
                                                <DeleteConfirmButton
                                                    button_class="delete-btn"
                                                    on_confirm=Callback::new(move |_| on_delete.run(delete_id.clone()))
                                                />
                                            </td>
                                        </tr>
                                    }
                                }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>

            <PaginationControls
                pagination=pagination
                on_page_change=Callback::new(move |page: u32| {
                    let next = state.with_untracked(|s| s.pagination.for_page(page));
                    dispatch(ListAction::SetPagination(next));
                })
            />

            <Modal open=is_modal_open title=modal_title on_close=close_modal>
                {move || {
                    let initial = state.with_untracked(|s| s.current.clone());
                    view! {
                        <ProjectForm
                            initial=initial
                            is_submitting=is_submitting
                            on_submit=on_submit
                            on_cancel=close_modal
                        />
                    }
                }}
            </Modal>
        </div>
    }
}
