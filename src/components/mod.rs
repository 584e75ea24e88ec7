//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome shared by the credential screens; pages
//! own the orchestration around them.

pub mod form_input;
