//! # agrimart-client
//!
//! Leptos + WASM frontend for the AgriMart marketplace registration flow.
//!
//! This crate contains the registration page, the submission driver and
//! wire types for the user-creation API, application state for in-flight
//! tracking, and browser-environment helpers (cookie jar, window effects).
//! The account API, the login page, and the session layer that issues the
//! CSRF cookie live server-side and are consumed over HTTP.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
