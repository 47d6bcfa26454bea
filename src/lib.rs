//! Camp-nou - Agentic AI Classroom Scheduling landing page
//!
//! A single-page marketing front-end with client-only interactive state
//! (view switching, theme preference, mock booking flow), built with
//! Leptos and WebAssembly.

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
