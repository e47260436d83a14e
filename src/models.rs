//! Frontend Models
//!
//! Response payloads of the cart, opening-hours and geocoding endpoints,
//! plus the place object emitted by the autocomplete widget.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::error::ActionError;

/// Server-formatted value rendered verbatim into the page.
///
/// Accepts strings, numbers, booleans and null so that fields the server
/// sends unquoted (counts, quantities, ids) render the way a browser would.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DisplayText(pub String);

impl DisplayText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Loose numeric `<= 0`: blank counts as zero, non-numeric text never matches
    pub fn is_non_positive(&self) -> bool {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            return true;
        }
        trimmed.parse::<f64>().map(|n| n <= 0.0).unwrap_or(false)
    }

    /// Loose numeric `== 0`
    pub fn is_zero(&self) -> bool {
        let trimmed = self.0.trim();
        trimmed.is_empty() || trimmed.parse::<f64>().map(|n| n == 0.0).unwrap_or(false)
    }
}

impl From<&str> for DisplayText {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for DisplayText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DisplayText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self(display_value(&value)))
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => display_number(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Integral floats print without a fraction (`3.0` -> `3`), as in the browser
fn display_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Wraps any present value, `null` included, in `Some`
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DisplayText>, D::Error> {
    DisplayText::deserialize(deserializer).map(Some)
}

// ========================
// Cart
// ========================

/// Tax category -> sub-key (usually the percentage) -> amount, in server order
pub type TaxBreakdown = IndexMap<String, IndexMap<String, DisplayText>>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CartCounter {
    #[serde(default)]
    pub cart_count: DisplayText,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CartAmount {
    #[serde(default)]
    pub subtotal: DisplayText,
    #[serde(default)]
    pub tax_dict: TaxBreakdown,
    #[serde(default)]
    pub grand_total: DisplayText,
}

/// Raw response of the add / decrease / delete cart endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CartResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: DisplayText,
    #[serde(default)]
    pub cart_counter: Option<CartCounter>,
    /// `None` only when the field is absent; `null` reads as blank
    #[serde(default, deserialize_with = "present")]
    pub qty: Option<DisplayText>,
    #[serde(default)]
    pub cart_amount: Option<CartAmount>,
}

/// A successful cart response with every field the page needs
#[derive(Debug, Clone, PartialEq)]
pub struct CartUpdate {
    pub status: String,
    pub message: String,
    pub cart_count: DisplayText,
    pub qty: Option<DisplayText>,
    pub amounts: CartAmount,
}

pub const STATUS_LOGIN_REQUIRED: &str = "login_required";
pub const STATUS_FAILED: &str = "Failed";
pub const STATUS_SUCCESS: &str = "success";

impl CartResponse {
    /// Classify by `status`: login required, business failure, or success
    pub fn into_update(self) -> Result<CartUpdate, ActionError> {
        match self.status.as_str() {
            STATUS_LOGIN_REQUIRED => return Err(ActionError::LoginRequired(self.message.0)),
            STATUS_FAILED => return Err(ActionError::Rejected(self.message.0)),
            _ => {}
        }
        let counter = self
            .cart_counter
            .ok_or_else(|| ActionError::Decode("missing cart_counter".to_string()))?;
        let amounts = self
            .cart_amount
            .ok_or_else(|| ActionError::Decode("missing cart_amount".to_string()))?;
        Ok(CartUpdate {
            status: self.status,
            message: self.message.0,
            cart_count: counter.cart_count,
            qty: self.qty,
            amounts,
        })
    }
}

// ========================
// Opening Hours
// ========================

/// Response of the add-opening-hour endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HourAddedResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub id: DisplayText,
    #[serde(default)]
    pub day: DisplayText,
    /// `"Closed"` when the day is closed; anything else means open
    #[serde(default)]
    pub is_closed: DisplayText,
    #[serde(default)]
    pub from_hour: DisplayText,
    #[serde(default)]
    pub to_hour: DisplayText,
    #[serde(default)]
    pub message: DisplayText,
}

/// Response of the remove-opening-hour endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HourRemovedResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub id: DisplayText,
}

// ========================
// Geocoding
// ========================

/// Place object emitted by the autocomplete widget on `select`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlaceSelection {
    #[serde(default)]
    pub lat: Option<DisplayText>,
    #[serde(default)]
    pub lon: Option<DisplayText>,
    #[serde(default)]
    pub display_name: String,
}

impl PlaceSelection {
    /// `(lat, lon)` when both are present and non-blank
    pub fn coordinates(&self) -> Option<(String, String)> {
        match (&self.lat, &self.lon) {
            (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => {
                Some((lat.0.clone(), lon.0.clone()))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeoAddress {
    pub country: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub postcode: Option<String>,
}

/// Structured address fields written into the address form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedAddress {
    pub country: String,
    pub state: String,
    pub city: String,
    pub postcode: String,
}

fn first_non_empty(candidates: &[&Option<String>]) -> String {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

impl GeoAddress {
    pub fn resolve(&self) -> ResolvedAddress {
        ResolvedAddress {
            country: first_non_empty(&[&self.country]),
            state: first_non_empty(&[&self.state, &self.region]),
            city: first_non_empty(&[&self.city, &self.town, &self.village]),
            postcode: first_non_empty(&[&self.postcode]),
        }
    }
}

/// Response of the reverse-geocode endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub address: Option<GeoAddress>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ReverseGeocodeResponse {
    pub fn into_address(self) -> Result<ResolvedAddress, ActionError> {
        if let Some(err) = self.error {
            return Err(ActionError::Service(err));
        }
        self.address
            .map(|a| a.resolve())
            .ok_or_else(|| ActionError::Service("no address in response".to_string()))
    }
}
