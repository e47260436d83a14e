//! Dish Online Frontend Entry Point
//!
//! Loaded on the server-rendered pages; wires cart, opening-hours and
//! address controls once the DOM is ready.

mod api;
mod app;
mod components;
mod config;
mod dialog;
mod error;
mod models;
mod page;

use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();
    dom_delegate::on_dom_ready(|| app::start(AppConfig::load()));
}
