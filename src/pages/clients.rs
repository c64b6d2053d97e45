//! Clients Page
//!
//! Searchable, filterable, paginated client list with modal create/edit and
//! inline delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, clients::ClientListQuery, clients::ClientPayload, non_empty, use_api, ApiError};
use crate::components::{
    ClientDraft, ClientForm, DeleteConfirmButton, Modal, PaginationControls, SearchBox,
};
use crate::debounce::use_debounced;
use crate::format::format_date;
use crate::list::{ListAction, ListState};
use crate::models::Client;
use crate::notify::use_toasts;
use crate::pages::{PAGE_SIZE, SEARCH_DEBOUNCE_MS};

#[component]
pub fn ClientsPage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();
    let state = RwSignal::new(ListState::<Client>::new(PAGE_SIZE));
    let dispatch = move |action: ListAction<Client>| {
        let _ = state.try_update(|s| s.apply(action));
    };

    // Memos dedupe by value, so reducer runs that leave the fetch inputs
    // unchanged (FetchStart, modal toggles) cannot re-trigger the effect.
    let search_term = Memo::new(move |_| state.with(|s| s.search_term.clone()));
    let debounced_search = use_debounced(search_term.into(), SEARCH_DEBOUNCE_MS);
    let page = Memo::new(move |_| state.with(|s| s.pagination.page));
    let limit = Memo::new(move |_| state.with(|s| s.pagination.limit));
    let status_filter = Memo::new(move |_| state.with(|s| s.filter("status").to_string()));
    let fetch_generation = StoredValue::new(0u64);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let query = ClientListQuery {
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
                let result = api::clients::list(&api, &query).await;
                // A newer fetch superseded this one; drop the response.
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
                            toasts.error("Failed to fetch clients", err.to_string());
                        }
                    }
                }
            });
        });
    }

    let on_submit = {
        let api = api.clone();
        Callback::new(move |draft: ClientDraft| {
            let current = state.with_untracked(|s| s.current.clone());
            dispatch(ListAction::SetSubmitting(true));
            let api = api.clone();
            spawn_local(async move {
                let payload = ClientPayload {
                    name: &draft.name,
                    email: &draft.email,
                    phone: &draft.phone,
                    company: non_empty(&draft.company),
                    notes: non_empty(&draft.notes),
                    status: non_empty(&draft.status),
                };
                let result = match &current {
                    Some(client) => api::clients::update(&api, &client.id, &payload)
                        .await
                        .map(|r| (r.entity, "Client updated successfully")),
                    None => api::clients::create(&api, &payload)
                        .await
                        .map(|r| (r.entity, "Client created successfully")),
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
                        // Leave the modal open so the user can correct and retry.
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
                match api::clients::remove(&api, &id).await {
                    Ok(_) => {
                        dispatch(ListAction::DeleteEntity(id));
                        toasts.success("Client deleted successfully");
                    }
                    Err(err) => {
                        if !matches!(err, ApiError::Unauthorized) {
                            toasts.error("Failed to delete client", err.to_string());
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
                "Edit Client".to_string()
            } else {
                "Add New Client".to_string()
            }
        })
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Clients"</h1>
                <button class="add-btn" on:click=move |_| dispatch(ListAction::ToggleModal(None))>
                    "+ Add Client"
                </button>
            </div>

            <div class="list-controls">
                <SearchBox
                    value=Signal::derive(move || search_term.get())
                    placeholder="Search clients..."
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
                    <option value="Active">"Active"</option>
                    <option value="Inactive">"Inactive"</option>
                </select>
            </div>

            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|message| view! { <p class="list-error">{message}</p> })
            }}

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <p class="list-empty">"Loading clients..."</p> }
            >
                <Show
                    when=move || !items.get().is_empty()
                    fallback=move || view! {
                        <p class="list-empty">
                            {move || if search_term.get().is_empty() {
                                "No clients found. Add your first client!"
                            } else {
                                "No clients match your search criteria."
                            }}
                        </p>
                    }
                >
                    <table class="entity-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Phone"</th>
                                <th>"Company"</th>
                                <th>"Status"</th>
                                <th>"Created"</th>
                                <th class="actions-col">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                // updated_at in the key forces a keyed row
                                // to re-render after an in-place patch
                                key=|client| (client.id.clone(), client.updated_at.clone())
                                children={
                                    let on_delete = on_delete.clone();
                                    move |client| {
                                    let edit_target = client.clone();
                                    let delete_id = client.id.clone();
                                    let on_delete = on_delete.clone();
                                    let status = client.status.clone().unwrap_or_else(|| "Active".to_string());
                                    let status_class = if status == "Active" {
                                        "status-badge active"
                                    } else {
                                        "status-badge inactive"
                                    };
                                    view! {
                                        <tr>
                                            <td class="cell-primary">{client.name.clone()}</td>
                                            <td>{client.email.clone()}</td>
                                            <td>{client.phone.clone()}</td>
                                            <td>{client.company.clone().unwrap_or_default()}</td>
                                            <td><span class=status_class>{status.clone()}</span></td>
                                            <td>{format_date(&client.created_at)}</td>
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
                        <ClientForm
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
