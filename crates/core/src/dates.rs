//! Strict validation for the `from`/`to` date-range filters.
//!
//! The API accepts exactly three shapes: a bare `YYYY-MM-DD` date, a
//! `YYYY-MM-DDTHH:MM:SSZ` timestamp, or the same timestamp with a numeric
//! UTC offset in place of `Z`. Nothing else — no sub-second precision, no
//! space separators. An empty value means the filter is absent and is
//! always accepted.
//!
//! chrono alone is too lenient for this (it accepts `2024-1-1` for
//! `%Y-%m-%d`), so a regex pins the shape first and chrono then rejects
//! impossible calendar dates and clock times.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::error::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const DATE_TIME_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Validate a date filter value against the accepted shapes.
///
/// `field` names the offending parameter in the failure message.
pub fn validate_date(value: &str, field: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Ok(());
    }

    let ok = if value.contains('T') {
        let shape = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(Z|[+-]\d{2}:?\d{2})$")
            .unwrap();
        shape.is_match(value)
            && (NaiveDateTime::parse_from_str(value, DATE_TIME_UTC_FORMAT).is_ok()
                || DateTime::parse_from_str(value, DATE_TIME_OFFSET_FORMAT).is_ok())
    } else {
        let shape = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
        shape.is_match(value) && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
    };

    if ok {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "invalid {field} date '{value}': expected YYYY-MM-DD, \
             YYYY-MM-DDTHH:MM:SSZ, or YYYY-MM-DDTHH:MM:SS+HH:MM"
        )))
    }
}

/// Validate a date filter and hand the unchanged value back on success.
pub fn validate_and_format_date<'a>(value: &'a str, field: &str) -> Result<&'a str, Error> {
    validate_date(value, field)?;
    Ok(value)
}
