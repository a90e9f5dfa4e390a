//! Frontend Configuration
//!
//! Defaults suit the bundled server; a page may override any field by
//! defining `window.MARKET_UI_CONFIG` before the bundle loads.

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Fallback when `window.location` is unavailable
pub const DEFAULT_WEBSOCKET_URL: &str = "ws://localhost:8080/websocket";
const WEBSOCKET_PATH: &str = "/websocket";
const CONFIG_GLOBAL: &str = "MARKET_UI_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Notification socket; derived from the page origin when unset
    pub websocket_url: Option<String>,
    pub edit_cart_endpoint: String,
    pub cart_page: String,
    pub toast_dismiss_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            websocket_url: None,
            edit_cart_endpoint: "/editCartProduct".to_string(),
            cart_page: "/cart".to_string(),
            toast_dismiss_ms: 5000,
            log_level: "info".to_string(),
        }
    }
}

/// `ws://host/websocket` for http pages, `wss://` for https
pub fn websocket_url_for(protocol: &str, host: &str) -> String {
    let scheme = if protocol == "https:" { "wss" } else { "ws" };
    format!("{}://{}{}", scheme, host, WEBSOCKET_PATH)
}

impl AppConfig {
    /// Defaults merged with the page override, if any
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value(raw) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&format!("[CONFIG] Ignoring {}: {}", CONFIG_GLOBAL, e).into());
                Self::default()
            }
        }
    }

    pub fn websocket_url(&self) -> String {
        if let Some(url) = &self.websocket_url {
            return url.clone();
        }
        web_sys::window()
            .map(|w| w.location())
            .and_then(|loc| Some(websocket_url_for(&loc.protocol().ok()?, &loc.host().ok()?)))
            .unwrap_or_else(|| DEFAULT_WEBSOCKET_URL.to_string())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"toastDismissMs": 8000, "websocketUrl": "ws://shop:9000/websocket"}"#)
                .unwrap();
        assert_eq!(config.toast_dismiss_ms, 8000);
        assert_eq!(config.websocket_url.as_deref(), Some("ws://shop:9000/websocket"));
        assert_eq!(config.edit_cart_endpoint, "/editCartProduct");
        assert_eq!(config.cart_page, "/cart");
    }

    #[test]
    fn test_websocket_url_follows_page_scheme() {
        assert_eq!(websocket_url_for("http:", "localhost:8080"), "ws://localhost:8080/websocket");
        assert_eq!(websocket_url_for("https:", "shop.example"), "wss://shop.example/websocket");
    }

    #[test]
    fn test_log_level_parse() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
        config.log_level = "debug".into();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        config.log_level = "loud".into();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
