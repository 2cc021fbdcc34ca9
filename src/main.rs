//! Checklist Sync Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logging;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init_logging(logging::default_level()) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", err).into());
    }
    mount_to_body(App);
}
