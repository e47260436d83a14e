//! Endpoint Bindings
//!
//! HTTP calls to the server's AJAX endpoints and the geocoding service,
//! organized by domain.

mod cart;
mod hours;
mod geocode;

use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::error::ActionError;

pub use cart::*;
pub use hours::*;
pub use geocode::*;

/// Characters left alone by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Server views tell AJAX calls apart by this header
const AJAX_HEADER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// `application/x-www-form-urlencoded` body, spaces as `+`
pub fn encode_form(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                encode_component(key).replace("%20", "+"),
                encode_component(value).replace("%20", "+")
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ActionError> {
    if !response.ok() {
        return Err(ActionError::Status(response.status()));
    }
    Ok(response.json::<T>().await?)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ActionError> {
    let response = Request::get(url)
        .header(AJAX_HEADER.0, AJAX_HEADER.1)
        .send()
        .await?;
    read_json(response).await
}

/// Plain GET for third-party hosts; a custom header would force a CORS preflight
async fn get_external_json<T: DeserializeOwned>(url: &str) -> Result<T, ActionError> {
    let response = Request::get(url).send().await?;
    read_json(response).await
}

async fn post_form<T: DeserializeOwned>(url: &str, params: &[(&str, String)]) -> Result<T, ActionError> {
    let response = Request::post(url)
        .header(AJAX_HEADER.0, AJAX_HEADER.1)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(encode_form(params))?
        .send()
        .await?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_form_matches_browser_encoding() {
        let body = encode_form(&[
            ("day", "1".to_string()),
            ("from_hour", "09:00 AM".to_string()),
            ("csrfmiddlewaretoken", "a/b+c".to_string()),
        ]);
        assert_eq!(body, "day=1&from_hour=09%3A00+AM&csrfmiddlewaretoken=a%2Fb%2Bc");
    }

    #[test]
    fn test_encode_component_keeps_unreserved() {
        assert_eq!(encode_component("12.97-x_(y)"), "12.97-x_(y)");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    }
}
