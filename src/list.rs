//! List View State Machine
//!
//! Every entity page (clients, projects, interactions, reminders) drives the
//! same state shape through an explicit action vocabulary. The reducer is a
//! plain function over plain data so the transition rules stay unit-testable;
//! pages wrap a `ListState` in an `RwSignal` and dispatch through it.

use std::collections::BTreeMap;

use crate::models::{Entity, Pagination};

/// State backing one searchable, filterable, paginated list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<E: Entity> {
    pub items: Vec<E>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    /// Named filters sent to the server (e.g. "status" -> "COMPLETED").
    /// An absent name means the filter is off.
    pub filters: BTreeMap<&'static str, String>,
    pub pagination: Pagination,
    pub is_modal_open: bool,
    /// Edit target; `None` while the modal is in create mode.
    pub current: Option<E>,
    pub is_submitting: bool,
}

/// Actions accepted by [`ListState::apply`].
#[derive(Debug, Clone)]
pub enum ListAction<E: Entity> {
    FetchStart,
    FetchSuccess {
        items: Vec<E>,
        pagination: Pagination,
    },
    FetchError(String),
    SetSearchTerm(String),
    SetFilter {
        name: &'static str,
        value: String,
    },
    SetPagination(Pagination),
    ToggleModal(Option<E>),
    SetSubmitting(bool),
    AddEntity(E),
    UpdateEntity(E),
    DeleteEntity(String),
}

impl<E: Entity> ListState<E> {
    pub fn new(limit: u32) -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: None,
            search_term: String::new(),
            filters: BTreeMap::new(),
            pagination: Pagination::initial(limit),
            is_modal_open: false,
            current: None,
            is_submitting: false,
        }
    }

    /// Current value of a named filter, or "" when it is off.
    pub fn filter(&self, name: &str) -> &str {
        self.filters.get(name).map(String::as_str).unwrap_or("")
    }

    /// Changing what the result set looks like invalidates the page number:
    /// a shrunken result set must not leave us requesting a page past the
    /// new total, so any search/filter change snaps back to page 1.
    fn reset_page(&mut self) {
        if self.pagination.page != 1 {
            self.pagination = self.pagination.for_page(1);
        }
    }

    pub fn apply(&mut self, action: ListAction<E>) {
        match action {
            ListAction::FetchStart => {
                self.is_loading = true;
                self.error = None;
            }
            ListAction::FetchSuccess { items, pagination } => {
                self.items = items;
                self.pagination = pagination;
                self.is_loading = false;
            }
            ListAction::FetchError(message) => {
                self.error = Some(message);
                self.is_loading = false;
            }
            ListAction::SetSearchTerm(term) => {
                self.search_term = term;
                self.reset_page();
            }
            ListAction::SetFilter { name, value } => {
                if value.is_empty() {
                    self.filters.remove(name);
                } else {
                    self.filters.insert(name, value);
                }
                self.reset_page();
            }
            ListAction::SetPagination(pagination) => {
                self.pagination = pagination;
            }
            ListAction::ToggleModal(entity) => {
                self.is_modal_open = !self.is_modal_open;
                self.current = entity;
            }
            ListAction::SetSubmitting(submitting) => {
                self.is_submitting = submitting;
            }
            ListAction::AddEntity(entity) => {
                self.items.insert(0, entity);
                self.is_modal_open = false;
                self.is_submitting = false;
            }
            ListAction::UpdateEntity(entity) => {
                if let Some(slot) = self.items.iter_mut().find(|e| e.id() == entity.id()) {
                    *slot = entity;
                }
                self.is_modal_open = false;
                self.is_submitting = false;
            }
            ListAction::DeleteEntity(id) => {
                self.items.retain(|e| e.id() != id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Client;

    fn make_client(id: &str, name: &str) -> Client {
        Client {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            phone: "555-0100".to_string(),
            company: None,
            notes: None,
            status: None,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            updated_at: "2024-01-01T00:00:00.000Z".to_string(),
            user_id: "u1".to_string(),
        }
    }

    fn state_on_page(page: u32) -> ListState<Client> {
        let mut state = ListState::new(10);
        state.apply(ListAction::FetchSuccess {
            items: vec![make_client("a", "Ada"), make_client("b", "Bea")],
            pagination: Pagination {
                page,
                limit: 10,
                total_count: 42,
                total_pages: 5,
                has_next_page: page < 5,
                has_previous_page: page > 1,
            },
        });
        state
    }

    #[test]
    fn fetch_start_clears_previous_error() {
        let mut state = ListState::<Client>::new(10);
        state.apply(ListAction::FetchError("boom".into()));
        assert_eq!(state.error.as_deref(), Some("boom"));
        state.apply(ListAction::FetchStart);
        assert!(state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn search_term_resets_page_to_one() {
        let mut state = state_on_page(3);
        state.apply(ListAction::SetSearchTerm("acme".into()));
        assert_eq!(state.pagination.page, 1);
        assert_eq!(state.search_term, "acme");
    }

    #[test]
    fn search_term_on_page_one_leaves_pagination_untouched() {
        let mut state = state_on_page(1);
        let before = state.pagination.clone();
        state.apply(ListAction::SetSearchTerm("acme".into()));
        assert_eq!(state.pagination, before);
    }

    #[test]
    fn filter_changes_reset_page_and_empty_value_clears() {
        let mut state = state_on_page(4);
        state.apply(ListAction::SetFilter {
            name: "status",
            value: "COMPLETED".into(),
        });
        assert_eq!(state.pagination.page, 1);
        assert_eq!(state.filter("status"), "COMPLETED");

        state.apply(ListAction::SetFilter {
            name: "status",
            value: String::new(),
        });
        assert_eq!(state.filter("status"), "");
        assert!(state.filters.is_empty());
    }

    #[test]
    fn add_entity_prepends_and_closes_modal() {
        let mut state = state_on_page(1);
        state.apply(ListAction::ToggleModal(None));
        state.apply(ListAction::SetSubmitting(true));
        state.apply(ListAction::AddEntity(make_client("c", "Cyn")));
        assert_eq!(state.items[0].id, "c");
        assert_eq!(state.items.len(), 3);
        assert!(!state.is_modal_open);
        assert!(!state.is_submitting);
    }

    #[test]
    fn update_entity_patches_in_place_without_reorder() {
        let mut state = state_on_page(1);
        let mut edited = make_client("b", "Beatrix");
        edited.company = Some("Initech".into());
        state.apply(ListAction::UpdateEntity(edited));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].id, "a");
        assert_eq!(state.items[1].name, "Beatrix");
        assert_eq!(state.items[1].company.as_deref(), Some("Initech"));
    }

    #[test]
    fn update_entity_with_unknown_id_changes_nothing_but_closes_modal() {
        let mut state = state_on_page(1);
        let items_before = state.items.clone();
        state.apply(ListAction::ToggleModal(Some(make_client("a", "Ada"))));
        state.apply(ListAction::UpdateEntity(make_client("zz", "Ghost")));
        assert_eq!(state.items, items_before);
        assert!(!state.is_modal_open);
    }

    #[test]
    fn delete_entity_removes_exactly_the_matching_item() {
        let mut state = state_on_page(1);
        state.apply(ListAction::DeleteEntity("a".into()));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, "b");
        state.apply(ListAction::DeleteEntity("nope".into()));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn toggle_modal_tracks_edit_target() {
        let mut state = state_on_page(1);
        state.apply(ListAction::ToggleModal(Some(make_client("a", "Ada"))));
        assert!(state.is_modal_open);
        assert_eq!(state.current.as_ref().map(|c| c.id.as_str()), Some("a"));
        state.apply(ListAction::ToggleModal(None));
        assert!(!state.is_modal_open);
        assert_eq!(state.current, None);
    }

    #[test]
    fn page_navigation_does_not_reset_results() {
        let mut state = state_on_page(2);
        let next = state.pagination.for_page(3);
        state.apply(ListAction::SetPagination(next));
        assert_eq!(state.pagination.page, 3);
        assert_eq!(state.items.len(), 2);
    }
}
