//! Session persistence: tokens and cached user fields.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` defines the persistence seam and the `Session` handle views use;
//! `cookie` is the browser implementation, `memory` the test/SSR one.

pub mod cookie;
pub mod memory;
pub mod store;
