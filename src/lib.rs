//! # lessonshop-client
//!
//! Leptos + WASM client for the lesson storefront. The crate is the
//! browser-side state layer: a session store backed by the auth API and
//! `localStorage`, an in-memory shopping cart, and a static route table.
//! Pages and components are a thin presentation skin over those stores.
//!
//! Builds in two configurations: with the `csr` feature for the browser
//! (real HTTP, real storage), and with no features for native unit tests
//! (network and storage degrade to stubs).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point — mounts the application into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
