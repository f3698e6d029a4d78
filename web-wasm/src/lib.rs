//! Vectorizer Web App (Leptos + WASM)

mod app;
mod components;
pub mod controller;
pub mod download;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("ロガー初期化失敗: {}", e).into());
    }
    leptos::mount::mount_to_body(app::App);
}
