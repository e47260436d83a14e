//! DOM Delegate Utilities
//!
//! Document-level click delegation for server-rendered pages.
//! A handler fires for the closest ancestor of the click target matching its
//! selector, so elements inserted after binding are covered as well.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Attributes read off the element a delegated click resolved to
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClickTarget {
    /// The element's own `id` attribute (empty when absent)
    pub element_id: String,
    /// `data-id`
    pub data_id: Option<String>,
    /// `data-url`
    pub data_url: Option<String>,
}

impl ClickTarget {
    pub fn from_element(el: &web_sys::Element) -> Self {
        Self {
            element_id: el.id(),
            data_id: el.get_attribute("data-id"),
            data_url: el.get_attribute("data-url"),
        }
    }
}

/// Bind a click handler for every current and future element matching `selector`.
///
/// Default navigation is prevented for matched clicks only.
pub fn bind_click<F>(selector: &'static str, handler: F)
where
    F: Fn(ClickTarget) + 'static,
{
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Ok(el) = target.dyn_into::<web_sys::Element>() else { return };
        if let Ok(Some(matched)) = el.closest(selector) {
            ev.prevent_default();
            handler(ClickTarget::from_element(&matched));
        }
    });

    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    }
    on_click.forget();
}

/// Run `f` once the DOM is parsed (immediately if it already is)
pub fn on_dom_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = document() else { return };
    if doc.ready_state() != "loading" {
        f();
        return;
    }

    let cb = Closure::once_into_js(f);
    let _ = doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
}

/// Visit every element currently matching `selector`
pub fn for_each_match<F>(selector: &str, mut f: F)
where
    F: FnMut(web_sys::Element),
{
    let Some(doc) = document() else { return };
    let Ok(nodes) = doc.query_selector_all(selector) else { return };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            f(el);
        }
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}
