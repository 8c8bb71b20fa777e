//! # client
//!
//! Leptos + WASM frontend for the pwacore demo shell. A single viewport
//! swaps between loading, login, and dashboard views driven by the
//! session controller; the server side only echoes a fabricated user
//! record and serves this crate's compiled dist.

pub mod app;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
