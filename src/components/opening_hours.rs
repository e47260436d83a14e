//! Opening Hours Editor
//!
//! Vendor dashboard form for weekly opening hours: adds rows to the hours
//! table and removes them again.

use std::rc::Rc;

use leptos::logging::{log, warn};
use leptos::task::spawn_local;

use super::{report_error, HourRow};
use crate::api;
use crate::config::AppConfig;
use crate::error::ActionError;
use crate::models::{HourAddedResponse, HourRemovedResponse, STATUS_SUCCESS};
use crate::page::{Page, WebPage};

const DAY_ID: &str = "id_day";
const FROM_HOUR_ID: &str = "id_from_hour";
const TO_HOUR_ID: &str = "id_to_hour";
const IS_CLOSED_ID: &str = "id_is_closed";
const ADD_HOUR_URL_ID: &str = "add_hour_url";
const HOURS_FORM_ID: &str = "opening_hours";

const MISSING_FIELDS: &str = "Please fill all fields";

/// Values of the add-hour form at submit time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourForm {
    pub day: String,
    pub from_hour: String,
    pub to_hour: String,
    pub is_closed: bool,
    pub csrf_token: String,
}

impl HourForm {
    pub fn read<P: Page>(page: &P) -> Self {
        Self {
            day: page.value(DAY_ID).unwrap_or_default(),
            from_hour: page.value(FROM_HOUR_ID).unwrap_or_default(),
            to_hour: page.value(TO_HOUR_ID).unwrap_or_default(),
            is_closed: page.is_checked(IS_CLOSED_ID),
            csrf_token: page.csrf_token(),
        }
    }

    /// A closed day needs only the day; an open one also needs both hours
    pub fn has_required_fields(&self) -> bool {
        if self.is_closed {
            !self.day.is_empty()
        } else {
            !self.day.is_empty() && !self.from_hour.is_empty() && !self.to_hour.is_empty()
        }
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("day", self.day.clone()),
            ("from_hour", self.from_hour.clone()),
            ("to_hour", self.to_hour.clone()),
            ("is_closed", if self.is_closed { "True" } else { "False" }.to_string()),
            ("csrfmiddlewaretoken", self.csrf_token.clone()),
        ]
    }
}

/// Endpoint and form to submit, or `None` when nothing should be sent.
///
/// Missing fields are reported to the user here.
pub fn prepare_add_hour<P: Page>(page: &P, config: &AppConfig) -> Option<(String, HourForm)> {
    let Some(url) = page.value(ADD_HOUR_URL_ID).filter(|u| !u.is_empty()) else {
        warn!("[HOURS] #{} missing, cannot add hours", ADD_HOUR_URL_ID);
        return None;
    };
    let form = HourForm::read(page);
    if !form.has_required_fields() {
        report_error(page, &config.login_url, "HOURS", ActionError::Validation(MISSING_FIELDS.to_string()));
        return None;
    }
    Some((url, form))
}

pub fn apply_hour_added<P: Page>(page: &P, config: &AppConfig, result: Result<HourAddedResponse, ActionError>) {
    let outcome = result.and_then(|response| {
        if response.status == STATUS_SUCCESS {
            Ok(response)
        } else {
            Err(ActionError::Rejected(response.message.to_string()))
        }
    });
    match outcome {
        Ok(response) => {
            let row = HourRow::from_response(&response, config);
            log!("[HOURS] Added #{} ({} {})", row.id, row.day, row.hours);
            page.append_hour_row(row);
            page.reset_form(HOURS_FORM_ID);
        }
        Err(err) => report_error(page, &config.login_url, "HOURS", err),
    }
}

pub fn apply_hour_removed<P: Page>(page: &P, config: &AppConfig, result: Result<HourRemovedResponse, ActionError>) {
    match result {
        Ok(response) if response.status == STATUS_SUCCESS => {
            let id = format!("hour-{}", response.id);
            if !page.remove(&id) {
                warn!("[HOURS] #{} already removed", id);
            }
        }
        Ok(response) => warn!("[HOURS] Remove answered with status {:?}", response.status),
        Err(err) => report_error(page, &config.login_url, "HOURS", err),
    }
}

/// Register the add button and the delegated remove links
pub fn bind_opening_hours(config: Rc<AppConfig>) {
    let add_config = config.clone();
    dom_delegate::bind_click(".add_hour", move |_| {
        let Some((url, form)) = prepare_add_hour(&WebPage, &add_config) else {
            return;
        };
        let config = add_config.clone();
        spawn_local(async move {
            let result = api::add_opening_hour(&url, &form).await;
            apply_hour_added(&WebPage, &config, result);
        });
    });

    dom_delegate::bind_click(".remove_hour", move |target| {
        let Some(url) = target.data_url.filter(|u| !u.is_empty()) else {
            warn!("[HOURS] .remove_hour clicked without data-url");
            return;
        };
        let config = config.clone();
        spawn_local(async move {
            let result = api::remove_opening_hour(&url).await;
            apply_hour_removed(&WebPage, &config, result);
        });
    });
}
