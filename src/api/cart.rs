//! Cart Endpoints
//!
//! Add, decrease and delete all answer a plain GET on the URL the page
//! embeds in the control's `data-url`.

use super::get_json;
use crate::error::ActionError;
use crate::models::CartResponse;

pub async fn send_cart_action(url: &str) -> Result<CartResponse, ActionError> {
    get_json(url).await
}
