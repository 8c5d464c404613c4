//! # vault-client
//!
//! Leptos + WASM frontend for a single-user password vault.
//!
//! The crate holds the login/setup page and the vault dashboard, the state
//! models behind them, and a thin client for the vault's JSON API. The
//! server that stores and encrypts entries is a separate program; this crate
//! only talks to it over HTTP.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(App);
}
