//! Parsing for the date representations geodatabase exports actually carry.
//!
//! Source tables arrive with a mix of ISO 8601 timestamps, space-separated
//! timestamps, bare dates, and epoch-millisecond integers depending on the
//! exporting runtime. Everything parses into a naive timestamp; the output
//! side always renders with [`crate::value::DATETIME_FORMAT`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::value::DATETIME_FORMAT;

/// Accepted textual timestamp formats, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
];

/// Accepted date-only formats, tried after the timestamp formats.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parse a raw cell into a timestamp, if it matches any accepted form.
///
/// A plain integer is read as epoch milliseconds, matching the wider
/// schema's timestamp encoding.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    if let Ok(millis) = trimmed.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc());
    }
    None
}

/// Render a timestamp in the canonical output form.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}
