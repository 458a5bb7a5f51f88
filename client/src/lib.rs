//! # client
//!
//! Leptos + WASM front end for the agency client portal.
//!
//! The application root owns the single [`portal::SessionStore`], restores
//! it from `localStorage` at startup, and exposes it to pages through
//! context. Every non-public route renders through the `Guarded` component,
//! which defers to [`portal::RouteGuard`].

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
