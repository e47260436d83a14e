//! Reverse Geocoding
//!
//! LocationIQ lookup from coordinates to a structured address.

use super::{encode_component, get_external_json};
use crate::error::ActionError;
use crate::models::ReverseGeocodeResponse;

pub fn reverse_geocode_url(base: &str, key: &str, lat: &str, lon: &str) -> String {
    format!(
        "{}?key={}&lat={}&lon={}&format=json",
        base,
        encode_component(key),
        encode_component(lat),
        encode_component(lon)
    )
}

/// Errors and non-2xx answers both surface as `Err`; the service reports
/// failures as `{"error": ...}` with a 4xx status
pub async fn reverse_geocode(base: &str, key: &str, lat: &str, lon: &str) -> Result<ReverseGeocodeResponse, ActionError> {
    get_external_json(&reverse_geocode_url(base, key, lat, lon)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_geocode_url() {
        let url = reverse_geocode_url("https://us1.locationiq.com/v1/reverse.php", "pk.abc", "12.9", "77.6");
        assert_eq!(url, "https://us1.locationiq.com/v1/reverse.php?key=pk.abc&lat=12.9&lon=77.6&format=json");
    }
}
