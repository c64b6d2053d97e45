//! Client endpoints.

use serde::Serialize;

use super::{ApiClient, ApiError, EntityResponse, ListResponse, MessageResponse, Query};
use crate::models::Client;

/// Server-side search/filter/pagination parameters for the client list.
#[derive(Debug, Clone, Default)]
pub struct ClientListQuery {
    pub search: String,
    pub status: String,
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'a str>,
}

pub async fn list(api: &ApiClient, query: &ClientListQuery) -> Result<ListResponse<Client>, ApiError> {
    let qs = Query::new()
        .push("search", &query.search)
        .push("status", &query.status)
        .push_u32("page", query.page)
        .push_u32("limit", query.limit)
        .push("sortBy", "createdAt")
        .push("sortOrder", "desc")
        .build();
    api.get(&format!("/api/clients{}", qs)).await
}

pub async fn create(
    api: &ApiClient,
    payload: &ClientPayload<'_>,
) -> Result<EntityResponse<Client>, ApiError> {
    api.post("/api/clients", payload).await
}

pub async fn update(
    api: &ApiClient,
    id: &str,
    payload: &ClientPayload<'_>,
) -> Result<EntityResponse<Client>, ApiError> {
    api.put(&format!("/api/clients/{}", id), payload).await
}

pub async fn remove(api: &ApiClient, id: &str) -> Result<MessageResponse, ApiError> {
    api.delete(&format!("/api/clients/{}", id)).await
}
