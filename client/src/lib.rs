//! # librovault
//!
//! Leptos + WASM frontend for LibroVault.
//!
//! This crate contains the dashboard shell, the login page, session state, and
//! the client for the hosted auth API. Built with the `ssr` feature it is
//! rendered by `librovault-server`; built with `hydrate` it becomes the browser
//! bundle that takes over the server-rendered markup.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
