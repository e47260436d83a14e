//! Page Access
//!
//! The handful of DOM reads and writes the components perform, behind a trait
//! so the response handling can run against an in-memory page in tests.

mod web;
#[cfg(test)]
mod fake;

pub use web::WebPage;
#[cfg(test)]
pub use fake::FakePage;

use crate::components::HourRow;
use crate::dialog::Dialog;

pub trait Page {
    /// Current location pathname
    fn path(&self) -> String;

    /// Text of the element with `id`, `None` if it is absent
    fn text(&self, id: &str) -> Option<String>;
    fn set_text(&self, id: &str, text: &str);

    /// Remove the element with `id`; false if it was not there
    fn remove(&self, id: &str) -> bool;
    /// Make a hidden element visible (`display: block`)
    fn reveal(&self, id: &str);

    /// Current value of an input or select
    fn value(&self, id: &str) -> Option<String>;
    fn set_value(&self, id: &str, value: &str);
    fn is_checked(&self, id: &str) -> bool;
    fn set_placeholder(&self, id: &str, text: &str);

    /// `(element id, attribute value)` for every element matching `selector`
    fn attribute_pairs(&self, selector: &str, attribute: &str) -> Vec<(String, String)>;

    /// Anti-forgery token from the page's hidden form input
    fn csrf_token(&self) -> String;

    fn append_hour_row(&self, row: HourRow);
    fn reset_form(&self, id: &str);

    fn notify(&self, dialog: Dialog);
    /// Show `dialog`, then navigate to `url` once it is dismissed
    fn notify_then_navigate(&self, dialog: Dialog, url: &str);
}
