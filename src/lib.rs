//! Omocha Bako - auth demo dashboard
//!
//! Browser front end for a token-issuing backend: user registration, login,
//! local session persistence and an authenticated call to a protected
//! resource, built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
