//! Reminders Page
//!
//! Due-date driven list: completed tri-state filter, a due-this-week
//! toggle, and an inline checkbox that patches just the completed flag.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{
    self, non_empty, reminders::ReminderListQuery, reminders::ReminderPayload, use_api, ApiError,
};
use crate::components::{
    DeleteConfirmButton, Modal, PaginationControls, ReminderDraft, ReminderForm, SearchBox,
};
use crate::debounce::use_debounced;
use crate::format::format_date;
use crate::list::{ListAction, ListState};
use crate::models::Reminder;
use crate::notify::use_toasts;
use crate::pages::{PAGE_SIZE, SEARCH_DEBOUNCE_MS};

#[component]
pub fn RemindersPage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();
    let state = RwSignal::new(ListState::<Reminder>::new(PAGE_SIZE));
    let dispatch = move |action: ListAction<Reminder>| {
        let _ = state.try_update(|s| s.apply(action));
    };

    let search_term = Memo::new(move |_| state.with(|s| s.search_term.clone()));
    let debounced_search = use_debounced(search_term.into(), SEARCH_DEBOUNCE_MS);
    let page = Memo::new(move |_| state.with(|s| s.pagination.page));
    let limit = Memo::new(move |_| state.with(|s| s.pagination.limit));
    let completed_filter = Memo::new(move |_| state.with(|s| s.filter("completed").to_string()));
    let due_this_week = Memo::new(move |_| state.with(|s| s.filter("dueThisWeek") == "true"));
    let fetch_generation = StoredValue::new(0u64);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let query = ReminderListQuery {
                search: debounced_search.get(),
                completed: completed_filter.get(),
                due_this_week: due_this_week.get(),
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
                let result = api::reminders::list(&api, &query).await;
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
                            toasts.error("Failed to fetch reminders", err.to_string());
                        }
                    }
                }
            });
        });
    }

    let on_submit = {
        let api = api.clone();
        Callback::new(move |draft: ReminderDraft| {
            let current = state.with_untracked(|s| s.current.clone());
            dispatch(ListAction::SetSubmitting(true));
            let api = api.clone();
            spawn_local(async move {
                let payload = ReminderPayload {
                    title: &draft.title,
                    description: non_empty(&draft.description),
                    due_date: &draft.due_date,
                    completed: Some(draft.completed),
                    client_id: non_empty(&draft.client_id),
                    project_id: non_empty(&draft.project_id),
                };
                let result = match &current {
                    Some(reminder) => api::reminders::update(&api, &reminder.id, &payload)
                        .await
                        .map(|r| (r.entity, "Reminder updated successfully")),
                    None => api::reminders::create(&api, &payload)
                        .await
                        .map(|r| (r.entity, "Reminder created successfully")),
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

    // Inline completed checkbox: patch the flag, merge the echoed reminder.
    let on_toggle_completed = Callback::new({
        let api = api.clone();
        move |(id, completed): (String, bool)| {
            let api = api.clone();
            spawn_local(async move {
                match api::reminders::set_completed(&api, &id, completed).await {
                    Ok(resp) => dispatch(ListAction::UpdateEntity(resp.entity)),
                    Err(err) => {
                        if !matches!(err, ApiError::Unauthorized) {
                            toasts.error("Failed to update reminder", err.to_string());
                        }
                    }
                }
            });
        }
    });

    let on_delete = Callback::new({
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            spawn_local(async move {
                match api::reminders::remove(&api, &id).await {
                    Ok(_) => {
                        dispatch(ListAction::DeleteEntity(id));
                        toasts.success("Reminder deleted successfully");
                    }
                    Err(err) => {
                        if !matches!(err, ApiError::Unauthorized) {
                            toasts.error("Failed to delete reminder", err.to_string());
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
                "Edit Reminder".to_string()
            } else {
                "Add New Reminder".to_string()
            }
        })
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Reminders"</h1>
                <button class="add-btn" on:click=move |_| dispatch(ListAction::ToggleModal(None))>
                    "+ Add Reminder"
                </button>
            </div>

            <div class="list-controls">
                <SearchBox
                    value=Signal::derive(move || search_term.get())
                    placeholder="Search reminders..."
                    on_change=Callback::new(move |term| dispatch(ListAction::SetSearchTerm(term)))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| dispatch(ListAction::SetFilter {
                        name: "completed",
                        value: event_target_value(&ev),
                    })
                >
                    <option value="">"All Reminders"</option>
                    <option value="false">"Pending"</option>
                    <option value="true">"Completed"</option>
                </select>
                <button
                    class=move || {
                        if due_this_week.get() { "toggle-btn active" } else { "toggle-btn" }
                    }
                    on:click=move |_| {
                        let value = if due_this_week.get_untracked() { "" } else { "true" };
                        dispatch(ListAction::SetFilter {
                            name: "dueThisWeek",
                            value: value.to_string(),
                        });
                    }
                >
                    "Due this week"
                </button>
            </div>

            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|message| view! { <p class="list-error">{message}</p> })
            }}

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <p class="list-empty">"Loading reminders..."</p> }
            >
                <Show
                    when=move || !items.get().is_empty()
                    fallback=move || view! {
                        <p class="list-empty">
                            {move || if search_term.get().is_empty() {
                                "No reminders found. Add your first reminder!"
                            } else {
                                "No reminders match your search criteria."
                            }}
                        </p>
                    }
                >
                    <ul class="reminder-list">
                        <For
                            each=move || items.get()
                            key=|reminder| (reminder.id.clone(), reminder.updated_at.clone())
                            children={
                                let on_delete = on_delete.clone();
                                let on_toggle_completed = on_toggle_completed.clone();
                                move |reminder| {
                                let edit_target = reminder.clone();
                                let delete_id = reminder.id.clone();
                                let toggle_id = reminder.id.clone();
                                let completed = reminder.completed;
                                let on_delete = on_delete.clone();
                                let on_toggle_completed = on_toggle_completed.clone();
                                let linked = [
                                    reminder.client_name.clone(),
                                    reminder.project_title.clone(),
                                ]
                                .into_iter()
                                .flatten()
                                .collect::<Vec<_>>()
                                .join(", ");
                                let row_class = if completed { "reminder done" } else { "reminder" };
                                view! {
                                    <li class=row_class>
                                        <input
                                            type="checkbox"
                                            prop:checked=completed
                                            on:change=move |_| {
                                                on_toggle_completed.run((toggle_id.clone(), !completed))
                                            }
                                        />
                                        <div class="reminder-body">
                                            <span class="reminder-title">{reminder.title.clone()}</span>
                                            <span class="reminder-due">
                                                {format!("Due {}", format_date(&reminder.due_date))}
                                            </span>
                                            <Show when={
                                                let linked = linked.clone();
                                                move || !linked.is_empty()
                                            }>
                                                <span class="reminder-links">{linked.clone()}</span>
                                            </Show>
                                        </div>
                                        <div class="reminder-actions">
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
                                        </div>
                                    </li>
                                }
                            }
                            }
                        />
                    </ul>
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
                        <ReminderForm
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
