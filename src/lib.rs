//! # fluxa-client
//!
//! Leptos + WASM frontend for the Fluxa tutorial pipeline. Submits a tutorial
//! URL with a set of images to `POST /apply`, tracks the submission status and
//! previews the rendered artifact, either decoded from an inline base64
//! payload or referenced by a download URL.
//!
//! Browser bindings live behind the `csr` feature; without it every module
//! builds natively so the submission logic is testable on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
