//! Cart Actions
//!
//! Add / decrease / delete controls on menu and cart pages. Each click sends
//! one GET to the control's `data-url` and applies the answer to the counter,
//! the line quantity, the totals and (on the cart page) the line rows.

use std::rc::Rc;

use dom_delegate::ClickTarget;
use leptos::logging::{log, warn};
use leptos::task::spawn_local;

use super::{render_cart_amounts, report_error};
use crate::api;
use crate::config::AppConfig;
use crate::dialog::Dialog;
use crate::error::ActionError;
use crate::models::{CartResponse, DisplayText};
use crate::page::{Page, WebPage};

const CART_COUNTER_ID: &str = "cart_counter";
const EMPTY_CART_ID: &str = "empty-cart";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartAction {
    Add,
    Decrease,
    Delete,
}

impl CartAction {
    pub const ALL: [CartAction; 3] = [CartAction::Add, CartAction::Decrease, CartAction::Delete];

    pub fn selector(&self) -> &'static str {
        match self {
            CartAction::Add => ".add_to_cart",
            CartAction::Decrease => ".decrease_cart",
            CartAction::Delete => ".delete_cart",
        }
    }
}

/// Identifiers read off a clicked cart control
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartControl {
    /// Food item whose `qty-<id>` badge is updated
    pub food_id: String,
    /// Cart line whose `cart-item-<id>` row may be removed
    pub cart_id: String,
    pub url: String,
}

impl CartControl {
    /// Add and decrease carry the food id in `data-id`; decrease keeps the
    /// cart line id in its own `id`; delete carries the cart line id in `data-id`.
    pub fn from_click(action: CartAction, target: &ClickTarget) -> Option<Self> {
        let url = target.data_url.clone().filter(|u| !u.is_empty())?;
        let data_id = target.data_id.clone().unwrap_or_default();
        Some(match action {
            CartAction::Add => Self { food_id: data_id, cart_id: String::new(), url },
            CartAction::Decrease => Self { food_id: data_id, cart_id: target.element_id.clone(), url },
            CartAction::Delete => Self { food_id: String::new(), cart_id: data_id, url },
        })
    }
}

/// Register delegated click handlers for all three cart controls
pub fn bind_cart_actions(config: Rc<AppConfig>) {
    for action in CartAction::ALL {
        let config = config.clone();
        dom_delegate::bind_click(action.selector(), move |target| {
            let Some(control) = CartControl::from_click(action, &target) else {
                warn!("[CART] {} clicked without data-url", action.selector());
                return;
            };
            let config = config.clone();
            spawn_local(async move {
                let result = api::send_cart_action(&control.url).await;
                apply_cart_response(&WebPage, &config, action, &control, result);
            });
        });
    }
}

pub fn apply_cart_response<P: Page>(
    page: &P,
    config: &AppConfig,
    action: CartAction,
    control: &CartControl,
    result: Result<CartResponse, ActionError>,
) {
    let update = match result.and_then(CartResponse::into_update) {
        Ok(update) => update,
        Err(err) => {
            report_error(page, &config.login_url, "CART", err);
            return;
        }
    };
    log!("[CART] {:?} ok, cart_count={}", action, update.cart_count);

    page.set_text(CART_COUNTER_ID, update.cart_count.as_str());

    match action {
        CartAction::Add => {
            write_qty(page, &control.food_id, update.qty.as_ref());
            render_cart_amounts(page, config, &update.amounts);
        }
        CartAction::Decrease => {
            write_qty(page, &control.food_id, update.qty.as_ref());
            render_cart_amounts(page, config, &update.amounts);
            if config.is_cart_page(&page.path()) {
                remove_cart_item(page, update.qty.as_ref(), &control.cart_id);
                check_empty_cart(page);
            }
        }
        CartAction::Delete => {
            page.notify(Dialog::success(update.status.as_str(), update.message.as_str()));
            render_cart_amounts(page, config, &update.amounts);
            remove_cart_item(page, Some(&DisplayText::from("0")), &control.cart_id);
            check_empty_cart(page);
        }
    }
}

/// An absent `qty` leaves the badge untouched
fn write_qty<P: Page>(page: &P, food_id: &str, qty: Option<&DisplayText>) {
    if let Some(qty) = qty {
        page.set_text(&format!("qty-{}", food_id), qty.as_str());
    }
}

/// Absent quantity never counts as zero
fn remove_cart_item<P: Page>(page: &P, qty: Option<&DisplayText>, cart_id: &str) {
    if !qty.is_some_and(DisplayText::is_non_positive) {
        return;
    }
    let id = format!("cart-item-{}", cart_id);
    if !page.remove(&id) {
        warn!("[CART] #{} already removed", id);
    }
}

/// Reveal the empty-cart notice once the counter reads zero
pub fn check_empty_cart<P: Page>(page: &P) {
    let is_empty = page
        .text(CART_COUNTER_ID)
        .map(|text| DisplayText(text).is_zero())
        .unwrap_or(false);
    if is_empty {
        page.reveal(EMPTY_CART_ID);
    }
}
