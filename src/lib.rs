//! # userportal
//!
//! Leptos + WASM client for a small user portal: registration, login,
//! profile viewing, and a cookie-backed dashboard, all against a remote
//! HTTP API.
//!
//! This crate contains pages, shared form components, screen state, the
//! typed API client, and the session store abstraction over browser
//! cookies.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
