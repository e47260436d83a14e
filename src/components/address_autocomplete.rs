//! Address Autocomplete
//!
//! Wraps the LocationIQ place-search widget on `#id_address`. Picking a place
//! fills the coordinate fields, then a reverse lookup fills country, state,
//! city and postal code.

use std::rc::Rc;

use leptos::logging::{log, warn};
use leptos::task::spawn_local;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api;
use crate::config::AppConfig;
use crate::error::ActionError;
use crate::models::{PlaceSelection, ResolvedAddress, ReverseGeocodeResponse};
use crate::page::{Page, WebPage};

const ADDRESS_ID: &str = "id_address";
const LATITUDE_ID: &str = "id_latitude";
const LONGITUDE_ID: &str = "id_longitude";
const COUNTRY_ID: &str = "id_country";
const STATE_ID: &str = "id_state";
const CITY_ID: &str = "id_city";
const PIN_CODE_ID: &str = "id_pin_code";

const PLACEHOLDER: &str = "Start typing...";
const WIDGET_GLOBAL: &str = "locationiq";

// ========================
// Widget Bindings
// ========================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = locationiq)]
    type Autocomplete;

    #[wasm_bindgen(constructor, js_namespace = locationiq, catch)]
    fn new(input: &web_sys::HtmlElement, options: &JsValue) -> Result<Autocomplete, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &Autocomplete, event: &str, callback: &js_sys::Function);
}

#[derive(Serialize)]
struct AutocompleteOptions<'a> {
    key: &'a str,
    limit: u32,
    dedupe: u8,
    countrycodes: &'a str,
}

// ========================
// Selection Handling
// ========================

/// Address parts guessed from a comma-separated display name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FallbackAddress {
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
}

/// Right-align the last comma-separated segments onto country, state, city.
///
/// Assumes `"..., city, state, country"`; names with a postcode or a
/// different number of parts land in the wrong fields.
pub fn fallback_address(display_name: &str) -> FallbackAddress {
    let parts: Vec<&str> = display_name.split(',').map(str::trim).collect();
    let n = parts.len();
    if n < 2 {
        return FallbackAddress::default();
    }
    FallbackAddress {
        country: Some(parts[n - 1].to_string()),
        state: (n >= 3).then(|| parts[n - 2].to_string()),
        city: (n >= 4).then(|| parts[n - 3].to_string()),
    }
}

/// Write the picked place into the form.
///
/// Returns the coordinates to reverse-geocode, or `None` when the widget
/// handed over a place without them (the fields are then left as they were).
pub fn apply_selection<P: Page>(page: &P, place: &PlaceSelection) -> Option<(String, String)> {
    let Some((lat, lon)) = place.coordinates() else {
        page.set_placeholder(ADDRESS_ID, PLACEHOLDER);
        return None;
    };
    page.set_value(LATITUDE_ID, &lat);
    page.set_value(LONGITUDE_ID, &lon);
    page.set_value(ADDRESS_ID, &place.display_name);
    Some((lat, lon))
}

pub fn apply_reverse_geocode<P: Page>(
    page: &P,
    display_name: &str,
    result: Result<ReverseGeocodeResponse, ActionError>,
) {
    match result.and_then(ReverseGeocodeResponse::into_address) {
        Ok(ResolvedAddress { country, state, city, postcode }) => {
            page.set_value(COUNTRY_ID, &country);
            page.set_value(STATE_ID, &state);
            page.set_value(CITY_ID, &city);
            page.set_value(PIN_CODE_ID, &postcode);
        }
        Err(err) => {
            warn!("[ADDRESS] Reverse geocoding failed ({}), parsing display name", err);
            let guess = fallback_address(display_name);
            let fields = [(COUNTRY_ID, guess.country), (STATE_ID, guess.state), (CITY_ID, guess.city)];
            for (id, value) in fields {
                if let Some(value) = value {
                    page.set_value(id, &value);
                }
            }
        }
    }
}

/// Live widget attached to the address input
pub struct AddressAutocomplete {
    _widget: Autocomplete,
}

impl AddressAutocomplete {
    /// Attach to `#id_address` when both the input and the widget library
    /// are on the page; `None` otherwise.
    pub fn attach(config: Rc<AppConfig>) -> Option<Self> {
        let win = web_sys::window()?;
        let input = win
            .document()?
            .get_element_by_id(ADDRESS_ID)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;

        let loaded = js_sys::Reflect::has(&win, &JsValue::from_str(WIDGET_GLOBAL)).unwrap_or(false);
        if !loaded {
            warn!("[ADDRESS] LocationIQ library not loaded");
            return None;
        }
        let Some(key) = config.access_token().map(str::to_string) else {
            warn!("[ADDRESS] {}", crate::config::missing_token_hint());
            return None;
        };

        let options = AutocompleteOptions {
            key: &key,
            limit: config.autocomplete_limit,
            dedupe: 1,
            countrycodes: &config.country_codes,
        };
        let js_options = serde_wasm_bindgen::to_value(&options).ok()?;
        let widget = match Autocomplete::new(&input, &js_options) {
            Ok(widget) => widget,
            Err(e) => {
                warn!("[ADDRESS] Autocomplete init failed: {:?}", e);
                return None;
            }
        };

        let on_select = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let place: PlaceSelection = serde_wasm_bindgen::from_value(event).unwrap_or_default();
            log!("[ADDRESS] Selected place: {}", place.display_name);
            let Some((lat, lon)) = apply_selection(&WebPage, &place) else {
                return;
            };
            let config = config.clone();
            let key = key.clone();
            spawn_local(async move {
                let result = api::reverse_geocode(&config.reverse_geocode_url, &key, &lat, &lon).await;
                apply_reverse_geocode(&WebPage, &place.display_name, result);
            });
        });
        widget.on("select", on_select.as_ref().unchecked_ref());
        on_select.forget();

        Some(Self { _widget: widget })
    }
}
