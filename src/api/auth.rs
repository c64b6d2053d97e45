//! Authentication endpoints.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError, MessageResponse};
use crate::models::User;

#[derive(Debug, Serialize)]
pub struct LoginPayload<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
}

pub async fn login(api: &ApiClient, payload: &LoginPayload<'_>) -> Result<AuthResponse, ApiError> {
    api.post("/api/auth/login", payload).await
}

pub async fn register(
    api: &ApiClient,
    payload: &RegisterPayload<'_>,
) -> Result<AuthResponse, ApiError> {
    api.post("/api/auth/register", payload).await
}

pub async fn logout(api: &ApiClient) -> Result<MessageResponse, ApiError> {
    api.post("/api/auth/logout", &serde_json::json!({})).await
}

pub async fn profile(api: &ApiClient) -> Result<ProfileResponse, ApiError> {
    api.get("/api/auth/profile").await
}
