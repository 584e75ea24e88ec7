//! Session persistence seam and the shared `Session` handle.
//!
//! DESIGN
//! ======
//! Views never touch `document.cookie` directly: they read and write
//! through a `Session` handle provided via context, backed by any
//! `SessionStore`. The browser uses the cookie-backed store; tests and
//! server rendering substitute the in-memory one.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use crate::net::types::LoginData;
use crate::session::cookie::CookieStore;

/// Key holding the bearer token.
pub const ACCESS_TOKEN: &str = "access_token";
/// Key holding the refresh token. Persisted for completeness; this client
/// never sends it.
pub const REFRESH_TOKEN: &str = "refresh_token";
/// Key holding the cached username.
pub const USER_NAME: &str = "userName";
/// Key holding the cached email.
pub const EMAIL: &str = "email";
/// Key holding the cached full name.
pub const FULL_NAME: &str = "fullName";

/// Days before the token entries expire.
pub const TOKEN_TTL_DAYS: u32 = 7;

/// Every key this client manages.
pub const SESSION_KEYS: [&str; 5] = [ACCESS_TOKEN, REFRESH_TOKEN, USER_NAME, EMAIL, FULL_NAME];

/// Key-value persistence behind the session.
pub trait SessionStore: Send + Sync {
    /// Store `value` under `key`; `None` for `ttl_days` means a
    /// session-scoped entry.
    fn set(&self, key: &str, value: &str, ttl_days: Option<u32>);
    /// Read the raw value under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Delete the entry under `key`.
    fn remove(&self, key: &str);
    /// Delete every entry in the store, managed by this client or not.
    fn clear_all(&self);
}

/// User fields cached at login, readable without a network call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionUser {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

/// Cloneable handle to the session store, provided via Leptos context.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    /// Cookie-backed session for the browser.
    pub fn new() -> Self {
        Self::with_store(Arc::new(CookieStore))
    }

    /// Session over a caller-supplied store.
    pub fn with_store(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The bearer token, if a non-empty one is stored.
    pub fn access_token(&self) -> Option<String> {
        non_empty(self.store.get(ACCESS_TOKEN))
    }

    /// Cached user fields; empty stored values read as absent.
    pub fn user(&self) -> SessionUser {
        SessionUser {
            user_name: non_empty(self.store.get(USER_NAME)),
            email: non_empty(self.store.get(EMAIL)),
            full_name: non_empty(self.store.get(FULL_NAME)),
        }
    }

    /// Persist a login payload: tokens with the 7-day expiry, user fields
    /// as session entries.
    pub fn store_login(&self, data: &LoginData) {
        self.store
            .set(ACCESS_TOKEN, &data.access_token, Some(TOKEN_TTL_DAYS));
        if let Some(refresh) = &data.refresh_token {
            self.store.set(REFRESH_TOKEN, refresh, Some(TOKEN_TTL_DAYS));
        }
        if let Some(user_name) = &data.user_name {
            self.store.set(USER_NAME, user_name, None);
        }
        if let Some(email) = &data.email {
            self.store.set(EMAIL, email, None);
        }
        if let Some(full_name) = &data.full_name {
            self.store.set(FULL_NAME, full_name, None);
        }
    }

    /// Remove the five session keys, leaving unrelated entries alone.
    /// Logout uses this.
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.store.remove(key);
        }
    }

    /// Wipe the entire store. Session teardown on a missing or stale token
    /// uses this.
    pub fn clear_all(&self) {
        self.store.clear_all();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
