//! Session Store
//!
//! Uses a reactive_stores Store for the signed-in user and bearer token.
//! The store is constructed once at startup and handed to the API client;
//! credential storage is written only here, never ad hoc at call sites.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::User;

const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, Default, Store)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True while a persisted token is being validated on startup.
    pub restoring: bool,
}

pub type SessionStore = Store<Session>;

/// Get the session store from context.
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Token left behind by a previous visit, if any.
pub fn persisted_token() -> Option<String> {
    local_storage()
        .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
        .filter(|t| !t.is_empty())
}

/// Record a signed-in user and persist the token for the next visit.
pub fn session_sign_in(store: &SessionStore, user: User, token: String) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &token);
    }
    *store.token().write() = Some(token);
    *store.user().write() = Some(user);
}

/// Restore a validated user against an already-persisted token.
pub fn session_restore(store: &SessionStore, user: User, token: String) {
    *store.token().write() = Some(token);
    *store.user().write() = Some(user);
}

/// Purge credentials everywhere: store and localStorage.
pub fn session_clear(store: &SessionStore) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
    *store.token().write() = None;
    *store.user().write() = None;
}
