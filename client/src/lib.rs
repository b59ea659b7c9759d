//! # client
//!
//! Leptos + WASM frontend for the meetup registration page.
//!
//! This crate contains the page shell, the static event sections (hero,
//! tracks, venue), the registration form and confirmation view, and the
//! browser transport that posts registrations to the service. Rendered on
//! the server with the `ssr` feature and hydrated in the browser with
//! `hydrate`.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
