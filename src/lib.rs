//! # scangrid-shell
//!
//! Leptos + WASM single-page shell: a local-storage-backed mock login gate,
//! a login form, and a responsive dashboard sidebar.
//!
//! Decision logic (session flag, route guard, drawer phases, login form
//! state) lives in plain types under `state` and `util` so it can be tested
//! on the host. Browser glue is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the application.
#[cfg(feature = "csr")]
pub fn start() {
    let (config, config_error) = match config::AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };

    console_error_panic_hook::set_once();
    if console_log::init_with_level(config.log_level()).is_err() {
        // Only fails when a logger is already installed, which keeps working.
        log::warn!("logger already initialized");
    }
    if let Some(e) = config_error {
        log::warn!("app config rejected, using defaults: {e}");
    }

    log::info!("scangrid shell starting");
    leptos::mount::mount_to_body(move || {
        use app::App;
        use leptos::prelude::*;
        view! { <App config=config/> }
    });
}
