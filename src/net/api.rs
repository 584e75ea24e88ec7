//! HTTP client for the account API.
//!
//! Client-side (hydrate): real calls via `gloo-net`. Server-side (SSR):
//! stubs returning a network error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses map to `ApiError::Rejected` carrying the body's
//! `message` field when one is present; a 401 from the profile endpoint
//! maps to `ApiError::SessionExpired`; transport and decode failures map to
//! `ApiError::Network`. Callers pick the user-facing fallback text, so this
//! module stays free of screen wording.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::Envelope;
use super::types::{LoginData, ProfileRecord};

/// Base URL of the account API backend; override at build time through
/// `USERPORTAL_API_BASE`.
pub const API_BASE_URL: &str = match option_env!("USERPORTAL_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8000",
};

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{API_BASE_URL}/api/user/{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_payload(
    email: &str,
    username: &str,
    password: &str,
    full_name: &str,
) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "username": username,
        "password": password,
        "fullName": full_name,
    })
}

// The login endpoint spells the key `userName` while register wants
// `username`; both are wire facts of the backend.
#[cfg(any(test, feature = "hydrate"))]
fn login_payload(email: &str, username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "userName": username,
        "password": password,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// Create an account via `POST /api/user/register`.
///
/// The success body (the created user) carries no token and is not
/// consumed; callers follow up with [`login`] to start a session.
///
/// # Errors
///
/// `Rejected` on a non-2xx status, `Network` if the request fails.
pub async fn register(
    email: &str,
    username: &str,
    password: &str,
    full_name: &str,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = register_payload(email, username, password, full_name);
        let resp = gloo_net::http::Request::post(&api_url("register"))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Rejected {
                message: extract_message(&body),
            });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, username, password, full_name);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Authenticate via `POST /api/user/login`, returning the session payload.
///
/// # Errors
///
/// `Rejected` on a non-2xx status, `Network` if the request or JSON
/// decoding fails.
pub async fn login(email: &str, username: &str, password: &str) -> Result<LoginData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = login_payload(email, username, password);
        let resp = gloo_net::http::Request::post(&api_url("login"))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Rejected {
                message: extract_message(&body),
            });
        }
        let envelope: Envelope<LoginData> = resp
            .json()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, username, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the authenticated user's record via `GET /api/user/profile`.
///
/// # Errors
///
/// `SessionExpired` on a 401, `Rejected` on other non-2xx statuses,
/// `Network` if the request or JSON decoding fails.
pub async fn fetch_profile(access_token: &str) -> Result<ProfileRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url("profile"))
            .header("Authorization", &bearer(access_token))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.status() == 401 {
            return Err(ApiError::SessionExpired);
        }
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Rejected {
                message: extract_message(&body),
            });
        }
        let envelope: Envelope<ProfileRecord> = resp
            .json()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
