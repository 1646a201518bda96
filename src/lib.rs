//! # blogdesk
//!
//! Leptos + WASM client for a REST blog platform: sign-in, blog CRUD and AI
//! topic suggestions.
//!
//! The request pipeline (`net`), credential persistence and session state
//! (`state`) and form validation (`util`) build and test natively; the
//! browser glue behind them is enabled by the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount `App`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
