//! Wire schema for the account API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend wraps every success body in `{data, message}`. User fields
//! travel in camelCase; optional fields default so leaner responses still
//! parse.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Success envelope around every 2xx response body.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    /// Human-readable status line; parsed but never shown in the UI.
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload of a successful login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginData {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default, rename = "userName")]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "fullName")]
    pub full_name: Option<String>,
}

/// User record returned by the profile endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default, rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "userName")]
    pub user_name: Option<String>,
}
