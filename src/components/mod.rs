//! Page Components
//!
//! Event-handler groups wired to the server-rendered page.

mod cart_actions;
mod cart_amounts;
mod opening_hours;
mod hour_row;
mod address_autocomplete;
mod item_qty;

pub use cart_actions::bind_cart_actions;
pub use cart_amounts::render_cart_amounts;
pub use opening_hours::{bind_opening_hours, HourForm};
pub use hour_row::{HourRow, HourRowView};
pub use address_autocomplete::AddressAutocomplete;
pub use item_qty::hydrate_item_quantities;

use leptos::logging::error;

use crate::dialog::{Dialog, DialogIcon};
use crate::error::ActionError;
use crate::page::Page;

const GENERIC_FAILURE: &str = "Something went wrong";

/// Show `err` to the user the way its kind calls for
pub(crate) fn report_error<P: Page>(page: &P, login_url: &str, tag: &str, err: ActionError) {
    match err {
        ActionError::LoginRequired(message) => page.notify_then_navigate(Dialog::info(message), login_url),
        ActionError::Rejected(message) => page.notify(Dialog::error(message)),
        ActionError::Validation(message) => page.notify(Dialog::info(message)),
        other => {
            error!("[{}] {}", tag, other);
            page.notify(Dialog::new(GENERIC_FAILURE, other.to_string(), DialogIcon::Error));
        }
    }
}
