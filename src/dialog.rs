//! SweetAlert Dialogs
//!
//! Binding to the page's `swal` global, with `window.alert` as fallback.

use leptos::logging::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = swal, catch)]
    fn swal(title: &str, text: &str, icon: &str) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogIcon {
    Info,
    Error,
    Success,
}

impl DialogIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogIcon::Info => "info",
            DialogIcon::Error => "error",
            DialogIcon::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub text: String,
    pub icon: DialogIcon,
}

impl Dialog {
    pub fn new(title: impl Into<String>, text: impl Into<String>, icon: DialogIcon) -> Self {
        Self { title: title.into(), text: text.into(), icon }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title, "", DialogIcon::Info)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title, "", DialogIcon::Error)
    }

    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(title, text, DialogIcon::Success)
    }
}

/// Show the dialog and wait until the user dismisses it
pub async fn show(dialog: &Dialog) {
    match swal(&dialog.title, &dialog.text, dialog.icon.as_str()) {
        Ok(promise) => {
            let _ = JsFuture::from(promise).await;
        }
        Err(_) => {
            warn!("[DIALOG] swal unavailable, falling back to window.alert");
            if let Some(win) = web_sys::window() {
                let message = if dialog.text.is_empty() {
                    dialog.title.clone()
                } else {
                    format!("{}\n{}", dialog.title, dialog.text)
                };
                let _ = win.alert_with_message(&message);
            }
        }
    }
}
