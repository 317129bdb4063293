//! # storefront-client
//!
//! Leptos + WASM frontend for the SariSari Hub campus storefront.
//!
//! This crate contains pages, components, application state, the REST client
//! for the storefront backend, and browser helpers (storage, timers,
//! WhatsApp links). The `ssr` feature lets the server crate render the same
//! routes; the `hydrate` feature builds the browser bundle.

pub mod actions;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
