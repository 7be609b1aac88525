//! Short-date rendering for the detail view.

use chrono::{NaiveDate, NaiveDateTime};

/// Renders the server's datetime string as a short date for display.
/// Unparseable input is shown as-is rather than hidden.
#[must_use]
pub fn format_short_date(raw: &str) -> String {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return datetime.format("%x").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%x").to_string();
    }
    raw.to_string()
}
