//! Countdown Board Entry Point

mod app;
mod board;
mod components;
mod config;
mod context;
mod edit;
mod error;
mod logging;
mod models;
mod schedule;
mod storage;
mod store;
mod theme;
mod time_format;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    mount_to_body(App);
}
