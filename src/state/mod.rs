//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`form` validation, `profile` screen phase) so
//! pages depend on small focused models that unit tests can drive directly.

pub mod form;
pub mod profile;
