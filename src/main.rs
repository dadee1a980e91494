//! Fruit Basket Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod pages;
mod query;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, errors) = AppConfig::load();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    for error in errors {
        log::warn!("config: {}, using defaults", error);
    }
    log::info!("fruit basket ui talking to {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
