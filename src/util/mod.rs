//! Utility helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep validation rules and navigation timing out of page
//! logic so both stay testable without a browser.

pub mod redirect;
pub mod validate;
