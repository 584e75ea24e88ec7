//! Error taxonomy for account API calls.
//!
//! ERROR HANDLING
//! ==============
//! Callers branch on the variant to pick message fallbacks, session
//! teardown, and delayed redirects. Nothing here panics; every failure is
//! rendered as inline text somewhere.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure modes of the account API client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` holds the
    /// body's `message` field when it was present and non-empty.
    #[error("{}", message.as_deref().unwrap_or("request rejected"))]
    Rejected { message: Option<String> },
    /// A protected endpoint answered 401; the stored session is stale.
    #[error("session expired")]
    SessionExpired,
    /// The request never completed (connection refused, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
}

/// Surface a server-provided message, falling back when it is absent or
/// blank.
pub fn surface_or(message: Option<&str>, fallback: &str) -> String {
    match message {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => fallback.to_owned(),
    }
}
