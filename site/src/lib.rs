//! # site
//!
//! Leptos frontend for the Rwanda Computing Olympiad website.
//!
//! Every section (resource directory, program timeline, sponsor directory)
//! renders from the shared [`catalog::Catalog`]. The crate builds with `ssr`
//! for server rendering and with `hydrate` for the WASM bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating olympiad site");
    leptos::mount::hydrate_body(app::App);
}
