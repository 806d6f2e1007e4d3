//! # client
//!
//! Leptos + WASM admin frontend for the course catalog API.
//!
//! The crate owns the session token, the light/dark theme, the login page
//! and the course list with its edit/create form. Pure state lives in
//! `state`, endpoint shapes in `net`, and browser side effects in `util`;
//! `pages` and `components` only wire them to the DOM.

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
