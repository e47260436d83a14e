//! Page Configuration
//!
//! Read once at start-up from the optional `window.DISHONLINE_CONFIG` object.
//! Every field has a default, so pages that set nothing keep working.

use leptos::logging::warn;
use serde::Deserialize;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "DISHONLINE_CONFIG";
const TOKEN_GLOBAL: &str = "LOCATIONIQ_ACCESS_TOKEN";

/// How several amounts under one tax category are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxBreakdownMode {
    /// Each amount overwrites the previous one; the last one stays visible
    #[default]
    LastWins,
    /// All amounts are joined with `", "`
    Joined,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Route of the cart page; amounts and row removal only happen there
    pub cart_path: String,
    pub login_url: String,
    /// Prefix of the per-row removal URL; the record id and `/` are appended
    pub hour_remove_prefix: String,
    pub reverse_geocode_url: String,
    /// Country filter passed to the autocomplete widget
    pub country_codes: String,
    pub autocomplete_limit: u32,
    pub tax_breakdown: TaxBreakdownMode,
    /// Falls back to `window.LOCATIONIQ_ACCESS_TOKEN`
    pub locationiq_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cart_path: "/cart/".to_string(),
            login_url: "/login".to_string(),
            hour_remove_prefix: "/vendor/opening-hours/remove/".to_string(),
            reverse_geocode_url: "https://us1.locationiq.com/v1/reverse.php".to_string(),
            country_codes: "in".to_string(),
            autocomplete_limit: 5,
            tax_breakdown: TaxBreakdownMode::LastWins,
            locationiq_key: None,
        }
    }
}

impl AppConfig {
    /// Load from page globals, falling back to defaults
    pub fn load() -> Self {
        let Some(win) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
        let mut config = if raw.is_undefined() || raw.is_null() {
            Self::default()
        } else {
            serde_wasm_bindgen::from_value::<Self>(raw).unwrap_or_else(|e| {
                warn!("[APP] Ignoring malformed {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            })
        };

        if config.locationiq_key.is_none() {
            config.locationiq_key = js_sys::Reflect::get(&win, &JsValue::from_str(TOKEN_GLOBAL))
                .ok()
                .and_then(|v| v.as_string())
                .or_else(lexical_token);
        }
        config
    }

    /// Access token, if one was configured and is non-blank
    pub fn access_token(&self) -> Option<&str> {
        self.locationiq_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn is_cart_page(&self, path: &str) -> bool {
        path == self.cart_path
    }

    pub fn hour_remove_url(&self, id: &str) -> String {
        format!("{}{}/", self.hour_remove_prefix, id)
    }
}

/// Top-level `const` / `let` bindings are global but not `window` properties;
/// a `Function` body runs in global scope and can still see them.
fn lexical_token() -> Option<String> {
    let body = format!("return typeof {0} === 'undefined' ? undefined : {0};", TOKEN_GLOBAL);
    let token = js_sys::Function::new_no_args(&body).call0(&JsValue::UNDEFINED).ok()?.as_string();
    if token.is_some() {
        warn!("[APP] {} is declared with const/let; read it outside window", TOKEN_GLOBAL);
    }
    token
}

/// Logged when autocomplete is skipped for lack of a token
pub fn missing_token_hint() -> String {
    format!(
        "No LocationIQ access token configured; set `var {}` or `{}.locationiq_key`",
        TOKEN_GLOBAL, CONFIG_GLOBAL
    )
}
