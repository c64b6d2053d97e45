//! REST API Client
//!
//! Typed async wrappers over the browser fetch API. The client is built once
//! at startup with the API origin and the session store; every request
//! carries the bearer token, and a 401 purges the session before the caller
//! sees the error, so expired credentials always land on the login view.

pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod interactions;
pub mod projects;
pub mod reminders;

use leptos::prelude::{expect_context, GetUntracked};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

use crate::models::Pagination;
use crate::session::{session_clear, SessionStore, SessionStoreFields};

/// Compile-time override for the API origin; same-origin when unset.
pub const BASE_URL: &str = match option_env!("CLIENTELE_API_URL") {
    Some(url) => url,
    None => "",
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Credentials rejected; the session has already been purged.
    #[error("unauthorized")]
    Unauthorized,
    /// The server rejected the request and said why.
    #[error("{0}")]
    Api(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// List payload shared by every entity endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<E> {
    pub items: Vec<E>,
    pub pagination: Pagination,
}

/// Mutation payload: the server echoes the affected entity.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityResponse<E> {
    #[serde(default)]
    pub message: Option<String>,
    pub entity: E,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// Query values travel inside application/x-www-form-urlencoded-ish strings;
// encode everything that would terminate or restructure a parameter.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Query-string builder; empty values are skipped so the URL only names
/// parameters that are actually set.
#[derive(Debug, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, name: &str, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        if !value.is_empty() {
            self.pairs.push((name.to_string(), value.to_string()));
        }
        self
    }

    pub fn push_u32(self, name: &str, value: u32) -> Self {
        self.push(name, value.to_string())
    }

    /// Flag parameter: present only when the flag is on.
    pub fn push_flag(self, name: &str, value: bool) -> Self {
        if value {
            self.push(name, "true")
        } else {
            self
        }
    }

    /// `?a=1&b=2`, or the empty string when no parameters are set.
    pub fn build(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(name, QUERY_VALUE),
                    utf8_percent_encode(value, QUERY_VALUE)
                )
            })
            .collect();
        format!("?{}", encoded.join("&"))
    }
}

/// HTTP client bound to one API origin and one session.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, session }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request("GET", path, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request("POST", path, Some(encode_body(body)?)).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request("PUT", path, Some(encode_body(body)?)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request("DELETE", path, None).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let headers = Headers::new().map_err(network_err)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(network_err)?;
        if let Some(token) = self.session.token().get_untracked() {
            headers
                .set("Authorization", &format!("Bearer {}", token))
                .map_err(network_err)?;
        }

        let init = RequestInit::new();
        init.set_method(method);
        init.set_headers(headers.as_ref());
        init.set_credentials(RequestCredentials::Include);
        if let Some(body) = body {
            init.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(&url, &init).map_err(network_err)?;
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_err)?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| ApiError::Decode("fetch did not yield a Response".into()))?;

        if response.status() == 401 {
            session_clear(&self.session);
            return Err(ApiError::Unauthorized);
        }

        let json = JsFuture::from(response.json().map_err(decode_err)?)
            .await
            .map_err(decode_err)?;

        if !response.ok() {
            let message = serde_wasm_bindgen::from_value::<ErrorBody>(json)
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("request failed with status {}", response.status()));
            return Err(ApiError::Api(message));
        }

        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Get the API client from context.
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

/// Optional payload fields: an empty form value means "not provided".
pub fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn network_err(err: JsValue) -> ApiError {
    ApiError::Network(js_detail(&err))
}

fn decode_err(err: JsValue) -> ApiError {
    ApiError::Decode(js_detail(&err))
}

fn js_detail(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_skips_empty_values() {
        let qs = Query::new()
            .push("search", "")
            .push("status", "COMPLETED")
            .push_u32("page", 2)
            .build();
        assert_eq!(qs, "?status=COMPLETED&page=2");
    }

    #[test]
    fn query_with_nothing_set_is_empty() {
        assert_eq!(Query::new().push("search", "").build(), "");
    }

    #[test]
    fn query_percent_encodes_values() {
        let qs = Query::new().push("search", "a&b =c?").build();
        assert_eq!(qs, "?search=a%26b%20%3Dc%3F");
    }

    #[test]
    fn flag_parameter_only_appears_when_on() {
        assert_eq!(Query::new().push_flag("dueThisWeek", true).build(), "?dueThisWeek=true");
        assert_eq!(Query::new().push_flag("dueThisWeek", false).build(), "");
    }

    #[test]
    fn api_error_messages_read_cleanly() {
        assert_eq!(ApiError::Api("email taken".into()).to_string(), "email taken");
        assert_eq!(
            ApiError::Network("failed to fetch".into()).to_string(),
            "network error: failed to fetch"
        );
        assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized");
    }
}
