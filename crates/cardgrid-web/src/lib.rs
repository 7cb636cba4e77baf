/// CardGrid web interface
///
/// Leptos app rendering a static grid of informational cards, served with
/// SSR by the `ssr` binary and hydrated in the browser under `hydrate`.

pub mod app;
pub mod components;
pub mod pages;
pub mod types;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod logging;
#[cfg(feature = "ssr")]
pub mod server;

#[cfg(test)]
mod testing;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
