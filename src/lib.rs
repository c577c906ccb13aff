//! # studio-ui
//!
//! Leptos + WASM front-end for a creator studio: variant-driven UI
//! primitives (badge, button, card), a simulated sign-in session, and a
//! persisted three-pane editor layout.
//!
//! Pages and components read shared state from context signals provided by
//! [`app::App`]; browser-only behavior (local storage, timers, window events)
//! is gated behind the `hydrate` feature so the same code renders on the
//! server.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
