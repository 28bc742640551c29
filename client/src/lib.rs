//! # client
//!
//! Leptos + WASM admin UI for student records.
//!
//! This crate contains the page, components, application state and the REST
//! client for the students resource. The `hydrate` feature builds the
//! browser bundle; the `ssr` feature is enabled by the host binary for
//! server-side rendering.

// Nested `view!` trees in the shell and table exceed the default when
// monomorphised for SSR.
#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("student admin hydrating");
    leptos::mount::hydrate_body(app::App);
}
