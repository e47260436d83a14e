//! Opening Hour Row
//!
//! One `<tr>` of the vendor's opening-hours table.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::HourAddedResponse;

const CLOSED: &str = "Closed";

#[derive(Debug, Clone, PartialEq)]
pub struct HourRow {
    pub id: String,
    pub day: String,
    /// `"Closed"` or `"<from> - <to>"`
    pub hours: String,
    pub remove_url: String,
}

impl HourRow {
    pub fn from_response(response: &HourAddedResponse, config: &AppConfig) -> Self {
        let hours = if response.is_closed.as_str() == CLOSED {
            CLOSED.to_string()
        } else {
            format!("{} - {}", response.from_hour, response.to_hour)
        };
        Self {
            id: response.id.to_string(),
            day: response.day.to_string(),
            hours,
            remove_url: config.hour_remove_url(response.id.as_str()),
        }
    }

    pub fn dom_id(&self) -> String {
        format!("hour-{}", self.id)
    }
}

#[component]
pub fn HourRowView(row: HourRow) -> impl IntoView {
    let dom_id = row.dom_id();
    let HourRow { day, hours, remove_url, .. } = row;

    view! {
        <tr id=dom_id>
            <td><b>{day}</b></td>
            <td>{hours}</td>
            <td>
                <a href="#" class="remove_hour" data-url=remove_url>"Remove"</a>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn added(json: &str) -> HourAddedResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_closed_day_row() {
        let response = added(r#"{"status":"success","id":14,"day":"Sunday","is_closed":"Closed"}"#);
        let row = HourRow::from_response(&response, &AppConfig::default());
        assert_eq!(row.hours, "Closed");
        assert_eq!(row.day, "Sunday");
        assert_eq!(row.dom_id(), "hour-14");
        assert_eq!(row.remove_url, "/vendor/opening-hours/remove/14/");
    }

    #[test]
    fn test_open_day_row_shows_range() {
        let response = added(
            r#"{"status":"success","id":"15","day":"Monday","is_closed":false,"from_hour":"09:00 AM","to_hour":"10:00 PM"}"#,
        );
        let row = HourRow::from_response(&response, &AppConfig::default());
        assert_eq!(row.hours, "09:00 AM - 10:00 PM");
        assert_eq!(row.dom_id(), "hour-15");
    }
}
