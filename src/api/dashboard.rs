//! Dashboard endpoint.

use std::collections::HashMap;

use serde::Deserialize;

use super::{ApiClient, ApiError};
use crate::models::{Client, Interaction, Project, ProjectStatus, Reminder};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub clients_count: u32,
    pub projects_count: u32,
    #[serde(default)]
    pub projects_by_status: HashMap<ProjectStatus, u32>,
    #[serde(default)]
    pub upcoming_reminders: Vec<Reminder>,
    #[serde(default)]
    pub recent_interactions: Vec<Interaction>,
    #[serde(default)]
    pub recent_clients: Vec<Client>,
    #[serde(default)]
    pub active_projects: Vec<Project>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub data: DashboardData,
}

pub async fn fetch(api: &ApiClient) -> Result<DashboardResponse, ApiError> {
    api.get("/api/dashboard").await
}
