//! # client
//!
//! Leptos + WASM front-end for snetwork: the login/register page, the
//! protected home feed and the navigation sidebar.
//!
//! The auth handshake itself (validation, messages, gate decision) lives in
//! `authflow`; this crate binds it to the browser through `localStorage`,
//! `gloo-net` and the Leptos router.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
