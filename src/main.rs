//! Supertask Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    mount_to_body(App);
}
