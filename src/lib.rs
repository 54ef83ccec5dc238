/// Tab Categorizer - Chrome Extension for grouping saved tabs by keyword
/// Built with Rust + WASM + Yew

mod background;
pub mod categorizer;
pub mod extension_state;
pub mod operations;
pub mod storage;
pub mod tab_data;
pub mod tab_store;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the categorizer for JavaScript access
#[wasm_bindgen]
pub fn classify_url(url: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&categorizer::classify(url))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Service worker handlers, called from the listeners in background.js
#[wasm_bindgen]
pub async fn on_installed() -> Result<(), JsValue> {
    background::on_installed().await
}

#[wasm_bindgen]
pub async fn on_storage_changed(changes: JsValue, area: JsValue) {
    background::on_storage_changed(changes, area).await;
}
