//! Interaction layer for the video-greeting landing page.
//!
//! `components` holds the page's state machines and flows behind the
//! capabilities in `platform`; `dom` wires them to the document.

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod platform;
pub mod utils;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    dom::boot().map_err(|e| {
        log::error!("Failed to start landing page: {}", e);
        JsValue::from_str(&e.to_string())
    })
}
