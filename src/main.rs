// Session, profile, and storage logic compiles natively so it can be unit
// tested; the Leptos views only exist in the browser build.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();
    let config = app_lib::config::AppConfig::load();
    app_lib::telemetry::init(&config.log_level);
    tracing::info!(commit = app_lib::GIT_COMMIT_HASH, "starting carnival-web");

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
