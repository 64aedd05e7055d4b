//! # client
//!
//! Leptos + WASM frontend for the template application.
//!
//! This crate contains the root app shell, pages, components, theme and
//! language preference state, the pre-render initializer script, static
//! translations, and the toast notification queue. The `ssr` feature is
//! consumed by the `server` crate; the `hydrate` feature builds the browser
//! bundle.

pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
