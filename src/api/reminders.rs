//! Reminder endpoints.

use serde::Serialize;

use super::{ApiClient, ApiError, EntityResponse, ListResponse, MessageResponse, Query};
use crate::models::Reminder;

/// Server-side search/filter/pagination parameters for the reminder list.
///
/// `completed` is a tri-state filter: empty for all, "true" for completed,
/// "false" for pending.
#[derive(Debug, Clone, Default)]
pub struct ReminderListQuery {
    pub search: String,
    pub completed: String,
    pub due_this_week: bool,
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPayload<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub due_date: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct CompletedPatch {
    completed: bool,
}

pub async fn list(api: &ApiClient, query: &ReminderListQuery) -> Result<ListResponse<Reminder>, ApiError> {
    let qs = Query::new()
        .push("search", &query.search)
        .push("completed", &query.completed)
        .push_flag("dueThisWeek", query.due_this_week)
        .push_u32("page", query.page)
        .push_u32("limit", query.limit)
        .push("sortBy", "dueDate")
        .push("sortOrder", "asc")
        .build();
    api.get(&format!("/api/reminders{}", qs)).await
}

pub async fn create(
    api: &ApiClient,
    payload: &ReminderPayload<'_>,
) -> Result<EntityResponse<Reminder>, ApiError> {
    api.post("/api/reminders", payload).await
}

pub async fn update(
    api: &ApiClient,
    id: &str,
    payload: &ReminderPayload<'_>,
) -> Result<EntityResponse<Reminder>, ApiError> {
    api.put(&format!("/api/reminders/{}", id), payload).await
}

/// Flip just the completed flag, leaving the rest of the reminder alone.
pub async fn set_completed(
    api: &ApiClient,
    id: &str,
    completed: bool,
) -> Result<EntityResponse<Reminder>, ApiError> {
    api.put(&format!("/api/reminders/{}", id), &CompletedPatch { completed })
        .await
}

pub async fn remove(api: &ApiClient, id: &str) -> Result<MessageResponse, ApiError> {
    api.delete(&format!("/api/reminders/{}", id)).await
}
