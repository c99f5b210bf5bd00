//! # expedite-frontend
//!
//! Leptos + WASM storefront frontend shell.
//!
//! This crate contains the application bootstrap, the auth session store,
//! and the small set of pages and components that read and mutate it.
//! Browser-only behavior sits behind the `csr` feature; everything else
//! builds and tests natively.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM start entrypoint: installs panic and logging hooks, then mounts.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    bootstrap::run();
}
