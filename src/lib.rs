//! # storefront
//!
//! Leptos + WASM presentation shell for the Shop ICY storefront: a themed
//! application root and a navigation bar whose account controls follow the
//! auth service's session.
//!
//! The navbar's session lifecycle lives in `state::nav` (transitions) and
//! `util::session_watch` (mount/teardown); components only wire signals and
//! markup around them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
