//! Page Wiring
//!
//! Binds every component to the current document. Handlers use delegation,
//! so one call per page load covers controls rendered later as well.

use std::rc::Rc;

use leptos::logging::log;

use crate::components::{bind_cart_actions, bind_opening_hours, hydrate_item_quantities, AddressAutocomplete};
use crate::config::AppConfig;
use crate::page::WebPage;

pub fn start(config: AppConfig) {
    let config = Rc::new(config);
    log!("[APP] Starting on {}", web_sys::window().and_then(|w| w.location().pathname().ok()).unwrap_or_default());

    let hydrated = hydrate_item_quantities(&WebPage);
    if hydrated > 0 {
        log!("[APP] Hydrated {} quantity badges", hydrated);
    }

    bind_cart_actions(config.clone());
    bind_opening_hours(config.clone());

    // The widget keeps its own listeners; the handle only lives for setup
    if AddressAutocomplete::attach(config).is_some() {
        log!("[APP] Address autocomplete attached");
    }
}
