//! CRUD Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod routes;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Some(level) = config.console_level() {
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&format!("logger not installed: {}", e).into());
        }
    }
    log::info!("[APP] starting, records under '{}'", config.storage_key);

    mount_to_body(move || view! { <App config=config /> });
}
