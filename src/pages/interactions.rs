//! Interactions Page
//!
//! Logged touchpoints (calls, emails, meetings) with a type filter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{
    self, interactions::InteractionListQuery, interactions::InteractionPayload, non_empty,
    use_api, ApiError,
};
use crate::components::{
    DeleteConfirmButton, InteractionDraft, InteractionForm, Modal, PaginationControls, SearchBox,
};
use crate::debounce::use_debounced;
use crate::format::format_date;
use crate::list::{ListAction, ListState};
use crate::models::{Interaction, InteractionType};
use crate::notify::use_toasts;
use crate::pages::{PAGE_SIZE, SEARCH_DEBOUNCE_MS};

#[component]
pub fn InteractionsPage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();
    let state = RwSignal::new(ListState::<Interaction>::new(PAGE_SIZE));
    let dispatch = move |action: ListAction<Interaction>| {
        let _ = state.try_update(|s| s.apply(action));
    };

    let search_term = Memo::new(move |_| state.with(|s| s.search_term.clone()));
    let debounced_search = use_debounced(search_term.into(), SEARCH_DEBOUNCE_MS);
    let page = Memo::new(move |_| state.with(|s| s.pagination.page));
    let limit = Memo::new(move |_| state.with(|s| s.pagination.limit));
    let type_filter = Memo::new(move |_| state.with(|s| s.filter("type").to_string()));
    let fetch_generation = StoredValue::new(0u64);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let query = InteractionListQuery {
                search: debounced_search.get(),
                kind: type_filter.get(),
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
                let result = api::interactions::list(&api, &query).await;
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
                            toasts.error("Failed to fetch interactions", err.to_string());
                        }
                    }
                }
            });
        });
    }

    let on_submit = {
        let api = api.clone();
        Callback::new(move |draft: InteractionDraft| {
            let current = state.with_untracked(|s| s.current.clone());
            dispatch(ListAction::SetSubmitting(true));
            let api = api.clone();
            spawn_local(async move {
                let payload = InteractionPayload {
                    date: non_empty(&draft.date),
                    kind: draft.kind,
                    notes: non_empty(&draft.notes),
                    client_id: non_empty(&draft.client_id),
                    project_id: non_empty(&draft.project_id),
                };
                let result = match &current {
                    Some(interaction) => api::interactions::update(&api, &interaction.id, &payload)
                        .await
                        .map(|r| (r.entity, "Interaction updated successfully")),
                    None => api::interactions::create(&api, &payload)
                        .await
                        .map(|r| (r.entity, "Interaction logged successfully")),
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
                match api::interactions::remove(&api, &id).await {
                    Ok(_) => {
                        dispatch(ListAction::DeleteEntity(id));
                        toasts.success("Interaction deleted successfully");
                    }
                    Err(err) => {
                        if !matches!(err, ApiError::Unauthorized) {
                            toasts.error("Failed to delete interaction", err.to_string());
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
                "Edit Interaction".to_string()
            } else {
                "Log Interaction".to_string()
            }
        })
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Interactions"</h1>
                <button class="add-btn" on:click=move |_| dispatch(ListAction::ToggleModal(None))>
                    "+ Log Interaction"
                </button>
            </div>

            <div class="list-controls">
                <SearchBox
                    value=Signal::derive(move || search_term.get())
                    placeholder="Search interactions..."
                    on_change=Callback::new(move |term| dispatch(ListAction::SetSearchTerm(term)))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| dispatch(ListAction::SetFilter {
                        name: "type",
                        value: event_target_value(&ev),
                    })
                >
                    <option value="">"All Types"</option>
                    {InteractionType::ALL
                        .iter()
                        .map(|kind| {
                            view! { <option value=kind.as_str()>{kind.label()}</option> }
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
                fallback=|| view! { <p class="list-empty">"Loading interactions..."</p> }
            >
                <Show
                    when=move || !items.get().is_empty()
                    fallback=move || view! {
                        <p class="list-empty">
                            {move || if search_term.get().is_empty() {
                                "No interactions yet. Log your first one!"
                            } else {
                                "No interactions match your search criteria."
                            }}
                        </p>
                    }
                >
                    <table class="entity-table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Type"</th>
                                <th>"Notes"</th>
                                <th>"Created"</th>
                                <th class="actions-col">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|interaction| {
                                    (interaction.id.clone(), interaction.updated_at.clone())
                                }
                                children={
                                    let on_delete = on_delete.clone();
                                    move |interaction| {
                                    let edit_target = interaction.clone();
                                    let delete_id = interaction.id.clone();
                                    let on_delete = on_delete.clone();
                                    let kind_class = match interaction.kind {
                                        InteractionType::Call => "type-badge call",
                                        InteractionType::Email => "type-badge email",
                                        InteractionType::Meeting => "type-badge meeting",
                                        InteractionType::Other => "type-badge other",
                                    };
                                    view! {
                                        <tr>
                                            <td class="cell-primary">{format_date(&interaction.date)}</td>
                                            <td>
                                                <span class=kind_class>{interaction.kind.label()}</span>
                                            </td>
                                            <td class="cell-notes">
                                                {interaction.notes.clone().unwrap_or_default()}
                                            </td>
                                            <td>{format_date(&interaction.created_at)}</td>
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
                        <InteractionForm
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
