//! Contact Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod form;
mod format;
mod labels;
mod logger;
mod manager;
mod models;
mod notify;
mod render;
mod store;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = ClientConfig::from_document();
    logger::init(config.log_level);
    mount_to_body(move || view! { <App config=config /> });
}
