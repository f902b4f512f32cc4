//! # client
//!
//! Leptos + WASM frontend for the DappVotes landing page.
//!
//! This crate contains the landing page, its banner and footer components,
//! the UI store slice they write to, and the clock they read. It is compiled
//! with `ssr` by the host binary and with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
