/// Extension-wide state kept in `chrome.storage.local`
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key whose changes are mirrored on the action badge
pub const BLOCKED_ADS_COUNT_KEY: &str = "blockedAdsCount";

/// Record written once when the extension is installed.
/// `blocked_ads_count` is bumped by the ad blocker, not by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionState {
    pub enabled: bool,
    pub custom_filters: Vec<Value>,
    pub blocked_ads_count: u64,
}

impl Default for ExtensionState {
    fn default() -> Self {
        ExtensionState {
            enabled: true,
            custom_filters: Vec::new(),
            blocked_ads_count: 0,
        }
    }
}

/// One entry of the `changes` object passed to `chrome.storage.onChanged`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageChange {
    #[serde(default)]
    pub old_value: Option<Value>,
    #[serde(default)]
    pub new_value: Option<Value>,
}

pub type StorageChanges = HashMap<String, StorageChange>;

/// Badge text for a change set, if it updates the blocked-ads counter
pub fn badge_text(changes: &StorageChanges) -> Option<String> {
    changes
        .get(BLOCKED_ADS_COUNT_KEY)
        .and_then(|change| change.new_value.as_ref())
        .map(js_to_string)
}

// Mirrors JavaScript's `String(value)` for the values storage can hold
fn js_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => n.as_f64().map(js_number_to_string).unwrap_or_default(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

// Below 1e21 JS prints integral numbers in plain decimal, shortest digits
fn js_number_to_string(f: f64) -> String {
    if f == 0.0 {
        "0".to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{}", f)
    } else {
        let s = serde_json::Number::from_f64(f)
            .map(|n| n.to_string())
            .unwrap_or_else(|| f.to_string());
        if s.contains('e') && !s.contains("e-") {
            s.replacen('e', "e+", 1)
        } else {
            s
        }
    }
}
