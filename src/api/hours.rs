//! Opening Hour Endpoints

use super::{get_json, post_form};
use crate::components::HourForm;
use crate::error::ActionError;
use crate::models::{HourAddedResponse, HourRemovedResponse};

pub async fn add_opening_hour(url: &str, form: &HourForm) -> Result<HourAddedResponse, ActionError> {
    post_form(url, &form.to_params()).await
}

pub async fn remove_opening_hour(url: &str) -> Result<HourRemovedResponse, ActionError> {
    get_json(url).await
}
