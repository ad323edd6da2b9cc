//! # client
//!
//! Leptos + WASM frontend for the sleep tracker.
//!
//! Pages, components, and UI state live here; the duration, validation and
//! export rules come from the `sleeplog` crate so they can be tested without a
//! browser. Browser APIs (`localStorage`, `fetch`, timers, Blob downloads) are
//! only compiled with the `csr` feature; native builds get no-op stubs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
