//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it wires field validation,
//! the session store, and the API client together and decides navigation
//! targets. Rendering details shared across forms live in `components`.

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod signup;
