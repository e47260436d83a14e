//! Browser-backed page access via web-sys.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};

use super::Page;
use crate::components::{HourRow, HourRowView};
use crate::dialog::{self, Dialog};

const HOURS_TABLE_SELECTOR: &str = ".opening_hours";
const CSRF_SELECTOR: &str = "input[name=csrfmiddlewaretoken]";

/// The live document
#[derive(Clone, Copy, Default)]
pub struct WebPage;

fn doc() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

fn element(id: &str) -> Option<web_sys::Element> {
    doc().and_then(|d| d.get_element_by_id(id))
}

fn element_or_warn(id: &str) -> Option<web_sys::Element> {
    let found = element(id);
    if found.is_none() {
        warn!("[PAGE] #{} not found", id);
    }
    found
}

impl Page for WebPage {
    fn path(&self) -> String {
        web_sys::window()
            .and_then(|win| win.location().pathname().ok())
            .unwrap_or_default()
    }

    fn text(&self, id: &str) -> Option<String> {
        element(id).map(|el| el.text_content().unwrap_or_default())
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn remove(&self, id: &str) -> bool {
        match element_or_warn(id) {
            Some(el) => {
                el.remove();
                true
            }
            None => false,
        }
    }

    fn reveal(&self, id: &str) {
        if let Some(el) = element_or_warn(id).and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
            let _ = el.style().set_property("display", "block");
        }
    }

    fn value(&self, id: &str) -> Option<String> {
        // Reflect covers <input>, <select> and <textarea> alike
        element(id)
            .and_then(|el| js_sys::Reflect::get(&el, &JsValue::from_str("value")).ok())
            .and_then(|v| v.as_string())
    }

    fn set_value(&self, id: &str, value: &str) {
        if let Some(el) = element_or_warn(id) {
            let _ = js_sys::Reflect::set(&el, &JsValue::from_str("value"), &JsValue::from_str(value));
        }
    }

    fn is_checked(&self, id: &str) -> bool {
        element(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.checked())
            .unwrap_or(false)
    }

    fn set_placeholder(&self, id: &str, text: &str) {
        if let Some(input) = element_or_warn(id).and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok()) {
            input.set_placeholder(text);
        }
    }

    fn attribute_pairs(&self, selector: &str, attribute: &str) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        dom_delegate::for_each_match(selector, |el| {
            if let Some(value) = el.get_attribute(attribute) {
                pairs.push((el.id(), value));
            }
        });
        pairs
    }

    fn csrf_token(&self) -> String {
        doc()
            .and_then(|d| d.query_selector(CSRF_SELECTOR).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn append_hour_row(&self, row: HourRow) {
        let table = doc()
            .and_then(|d| d.query_selector(HOURS_TABLE_SELECTOR).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        match table {
            Some(table) => {
                leptos::mount::mount_to(table, move || view! { <HourRowView row=row /> }).forget();
            }
            None => warn!("[PAGE] {} not found, row #{} not rendered", HOURS_TABLE_SELECTOR, row.id),
        }
    }

    fn reset_form(&self, id: &str) {
        if let Some(form) = element_or_warn(id).and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok()) {
            form.reset();
        }
    }

    fn notify(&self, dialog: Dialog) {
        spawn_local(async move {
            dialog::show(&dialog).await;
        });
    }

    fn notify_then_navigate(&self, dialog: Dialog, url: &str) {
        let url = url.to_string();
        spawn_local(async move {
            dialog::show(&dialog).await;
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href(&url);
            }
        });
    }
}
