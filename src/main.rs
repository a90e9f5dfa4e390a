#![allow(warnings)]
//! Market Frontend Entry Point

mod app;
mod cart;
mod commands;
mod components;
mod conditions;
mod config;
mod discount_rule;
mod dom;
mod error;
mod forms;
mod logging;
mod models;
mod notification;
mod pages;
mod rating;
mod selection;
mod table_filter;
mod validate;

use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    logging::init(config.log_level());
    app::start(config);
}
