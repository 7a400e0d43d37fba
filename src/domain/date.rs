//! Shared date validation and formatting helpers

use crate::error::{JotterError, Result};
use chrono::{NaiveDate, NaiveTime};

/// Parse a user-supplied `YYYY-MM-DD` date string.
///
/// This is the single validation boundary for dates: everything past it
/// works with an already-valid `NaiveDate`.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| JotterError::InvalidDate(format!("'{}' ({})", input.trim(), e)))
}

/// Format a date as `YYYY-MM-DD`
pub fn format_ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a time of day as `HH:MM`
pub fn format_hm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
