//! Project endpoints.

use serde::Serialize;

use super::{ApiClient, ApiError, EntityResponse, ListResponse, MessageResponse, Query};
use crate::models::{Project, ProjectStatus};

/// Server-side search/filter/pagination parameters for the project list.
#[derive(Debug, Clone, Default)]
pub struct ProjectListQuery {
    pub search: String,
    pub status: String,
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<&'a str>,
    pub status: ProjectStatus,
    pub client_id: &'a str,
}

pub async fn list(api: &ApiClient, query: &ProjectListQuery) -> Result<ListResponse<Project>, ApiError> {
    let qs = Query::new()
        .push("search", &query.search)
        .push("status", &query.status)
        .push_u32("page", query.page)
        .push_u32("limit", query.limit)
        .push("sortBy", "createdAt")
        .push("sortOrder", "desc")
        .build();
    api.get(&format!("/api/projects{}", qs)).await
}

pub async fn create(
    api: &ApiClient,
    payload: &ProjectPayload<'_>,
) -> Result<EntityResponse<Project>, ApiError> {
    api.post("/api/projects", payload).await
}

pub async fn update(
    api: &ApiClient,
    id: &str,
    payload: &ProjectPayload<'_>,
) -> Result<EntityResponse<Project>, ApiError> {
    api.put(&format!("/api/projects/{}", id), payload).await
}

pub async fn remove(api: &ApiClient, id: &str) -> Result<MessageResponse, ApiError> {
    api.delete(&format!("/api/projects/{}", id)).await
}
