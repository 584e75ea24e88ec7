//! Networking modules for the account API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and
//! `error` is the failure taxonomy callers branch on.

pub mod api;
pub mod error;
pub mod types;
