//! Todo List Frontend Entry Point

mod logging;
mod models;
mod filter;
mod config;
mod api;
mod auth;
mod notice;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
