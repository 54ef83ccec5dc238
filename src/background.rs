/// Background service worker: install defaults and the blocked-ads badge
///
/// The listeners themselves are registered synchronously by `background.js`
/// so no event is lost while the wasm module loads; they forward into the
/// handlers exported from `lib.rs`.
use js_sys::Promise;
use log::{debug, info, warn};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::extension_state::{ExtensionState, StorageChanges, badge_text};

#[derive(Serialize)]
struct BadgeDetails<'a> {
    text: &'a str,
}

#[wasm_bindgen]
extern "C" {
    // Binding for chrome.storage.local.set
    #[wasm_bindgen(js_namespace = ["chrome", "storage", "local"], js_name = set, catch)]
    fn storage_local_set(items: &JsValue) -> Result<Promise, JsValue>;

    // Binding for chrome.action.setBadgeText
    #[wasm_bindgen(js_namespace = ["chrome", "action"], js_name = setBadgeText, catch)]
    fn set_badge_text_js(details: &JsValue) -> Result<Promise, JsValue>;
}

// To be used with the `chrome.runtime.onInstalled` event
pub(crate) async fn on_installed() -> Result<(), JsValue> {
    let state = ExtensionState::default();
    let items = state
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    JsFuture::from(storage_local_set(&items)?).await?;
    info!("Initialized extension state: {:?}", state);
    Ok(())
}

// To be used with the `chrome.storage.onChanged` event
pub(crate) async fn on_storage_changed(changes: JsValue, area: JsValue) {
    let changes: StorageChanges = match serde_wasm_bindgen::from_value(changes) {
        Ok(changes) => changes,
        Err(e) => {
            warn!("Unreadable storage change set: {}", e);
            return;
        }
    };

    match badge_text(&changes) {
        Some(text) => {
            if let Err(e) = set_badge_text(&text).await {
                warn!("Failed to set badge text: {:?}", e);
            }
        }
        None => debug!("Storage change in {:?} left the badge alone", area.as_string()),
    }
}

async fn set_badge_text(text: &str) -> Result<(), JsValue> {
    let details = serde_wasm_bindgen::to_value(&BadgeDetails { text })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    JsFuture::from(set_badge_text_js(&details)?).await?;
    Ok(())
}
