//! # client
//!
//! Leptos + WASM frontend for the business dashboard: sign-in screens,
//! role-guarded home routes, and the unauthorized screen. Session rules live
//! in the `session` crate; this crate supplies the browser transport and
//! token storage and mirrors session state into reactive signals.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
