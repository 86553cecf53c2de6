use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use log::warn;

use crate::config::DisplayConfig;
use crate::errors::{ProjectionError, Result};

const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// parse the ISO-style date shapes the platform's records carry
///
/// Timestamps with an offset keep the calendar date of that offset.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// render as `dd MMM yyyy` in the configured locale, failing on bad input
pub fn try_format_date(input: &str, config: &DisplayConfig) -> Result<String> {
    let locale = config.locale()?;
    let date = parse_date(input).ok_or_else(|| ProjectionError::FormatFallback {
        input: input.to_string(),
        reason: "not an ISO 8601 date".to_string(),
    })?;

    Ok(format!(
        "{:02} {} {:04}",
        date.day(),
        locale.month_abbreviation(date.month()),
        date.year()
    ))
}

/// Render a date as `dd MMM yyyy` in the configured locale.
///
/// Never fails: when the input cannot be formatted the failure is logged and
/// the input comes back unchanged.
pub fn format_date_with(input: &str, config: &DisplayConfig) -> String {
    match try_format_date(input, config) {
        Ok(formatted) => formatted,
        Err(err) => {
            warn!("date formatting fell back to raw input: {}", err);
            input.to_string()
        }
    }
}

/// `format_date_with` using french month names
pub fn format_date(input: &str) -> String {
    format_date_with(input, &DisplayConfig::default())
}
