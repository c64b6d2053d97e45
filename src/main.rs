//! Clientele Frontend Entry Point

mod api;
mod app;
mod components;
mod debounce;
mod format;
mod list;
mod models;
mod notify;
mod pages;
mod paging;
mod session;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
