//! Date parsing and formatting utilities

use crate::constants::{
    ACCEPTED_DATETIME_FORMATS, ACCEPTED_DATE_FORMATS, DATABASE_FILENAME, STORAGE_DATE_FORMAT,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::path::PathBuf;

/// Get the default database path (`todoApplication.db` in the working directory)
#[must_use]
pub fn get_default_database_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(DATABASE_FILENAME)
}

/// Format a date the way it is stored (`yyyy-MM-dd`)
#[must_use]
pub fn format_date(date: &NaiveDate) -> String {
    date.format(STORAGE_DATE_FORMAT).to_string()
}

/// Parse a date-like string leniently
///
/// Tries RFC 3339 first, then the accepted date-time formats, then the
/// accepted calendar-date formats. For date-times the calendar date is taken
/// as written, without converting between offsets.
#[must_use]
pub fn parse_flexible_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    ACCEPTED_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            ACCEPTED_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        })
}

/// Convert milliseconds since the Unix epoch to a UTC calendar date
#[must_use]
pub fn date_from_timestamp_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}
