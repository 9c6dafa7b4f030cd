#![recursion_limit = "256"]

pub mod app;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod pages;

/// WASM entry point: attach to the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
