//! # hms-client
//!
//! Leptos + WASM frontend for the hospital administration dashboard.
//!
//! This crate contains the route-level pages, the shared layout chrome, the
//! generic CRUD state machine used by the patient/doctor/appointment views,
//! and small browser helpers. Records live only in view-local state seeded
//! from built-in data; there is no data API behind the UI.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
