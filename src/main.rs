//! Mortydex Entry Point

mod api;
mod app;
mod components;
mod debounce;
mod detail_state;
mod favorites;
mod list_state;
mod models;
mod pages;
mod url_state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
