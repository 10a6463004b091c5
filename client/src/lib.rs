//! # client
//!
//! Leptos + WASM front end for the portfolio site.
//!
//! Pages and components render the `portfolio` core: the contact page drives
//! a `ContactController`, and every page wraps itself in `PageTransition`,
//! which feeds the shared `TransitionOrchestrator`.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
