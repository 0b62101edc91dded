/// Browser tab access through the extension's JS bridge

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::PopupError;
use crate::interaction::TabSource;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;
}

/// The part of a chrome.tabs.Tab the popup reads
#[derive(Debug, Clone, Deserialize, PartialEq)]
struct ActiveTab {
    #[serde(default)]
    url: Option<String>,
}

/// Active tab of the current window, via chrome.tabs
pub struct BrowserTabs;

impl TabSource for BrowserTabs {
    async fn active_tab_url(&self) -> Result<String, PopupError> {
        let tab_js = getActiveTab()
            .await
            .map_err(|e| PopupError::Browser(describe_js_error(&e)))?;

        let tab: Option<ActiveTab> = serde_wasm_bindgen::from_value(tab_js)
            .map_err(|e| PopupError::Browser(format!("Failed to parse tab: {:?}", e)))?;

        tab.and_then(|t| t.url).ok_or(PopupError::MissingTabUrl)
    }
}

fn describe_js_error(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
