//! Interaction endpoints.

use serde::Serialize;

use super::{ApiClient, ApiError, EntityResponse, ListResponse, MessageResponse, Query};
use crate::models::{Interaction, InteractionType};

/// Server-side search/filter/pagination parameters for the interaction list.
#[derive(Debug, Clone, Default)]
pub struct InteractionListQuery {
    pub search: String,
    pub kind: String,
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<&'a str>,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<&'a str>,
}

pub async fn list(
    api: &ApiClient,
    query: &InteractionListQuery,
) -> Result<ListResponse<Interaction>, ApiError> {
    let qs = Query::new()
        .push("search", &query.search)
        .push("type", &query.kind)
        .push_u32("page", query.page)
        .push_u32("limit", query.limit)
        .push("sortBy", "createdAt")
        .push("sortOrder", "desc")
        .build();
    api.get(&format!("/api/interactions{}", qs)).await
}

pub async fn create(
    api: &ApiClient,
    payload: &InteractionPayload<'_>,
) -> Result<EntityResponse<Interaction>, ApiError> {
    api.post("/api/interactions", payload).await
}

pub async fn update(
    api: &ApiClient,
    id: &str,
    payload: &InteractionPayload<'_>,
) -> Result<EntityResponse<Interaction>, ApiError> {
    api.put(&format!("/api/interactions/{}", id), payload).await
}

pub async fn remove(api: &ApiClient, id: &str) -> Result<MessageResponse, ApiError> {
    api.delete(&format!("/api/interactions/{}", id)).await
}
