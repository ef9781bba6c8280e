//! Far Away Frontend Entry Point

mod app;
mod components;
mod config;
mod dialog;
mod logger;
mod sort;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init(config::LOG_LEVEL) {
        web_sys::console::warn_1(&format!("[main] Logger already set: {}", e).into());
    }
    mount_to_body(App);
}
