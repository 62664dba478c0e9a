use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{Result, SeatsurfingError};

/// ISO-8601 layouts with an explicit offset but no seconds.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Naive layouts accepted from users, tried in order after RFC 3339. Values without an offset are
/// taken as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%MZ",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d-%m-%Y %H:%M",
    "%d/%m/%Y %H:%M",
];

/// Normalize a user-supplied timestamp to `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn parse_datetime(input: &str) -> Result<String> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(to_api_timestamp(dt.with_timezone(&Utc)));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Ok(to_api_timestamp(dt.with_timezone(&Utc)));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(to_api_timestamp(naive.and_utc()));
        }
    }

    // A bare date means midnight UTC.
    if let Some(midnight) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(to_api_timestamp(midnight.and_utc()));
    }

    Err(SeatsurfingError::DateParse(input.to_string()))
}

pub fn to_api_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render an API timestamp as `YYYY-MM-DD HH:MM`, or return it unchanged if it does not parse.
pub fn format_datetime(iso: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%Y-%m-%d %H:%M").to_string();
    }
    iso.to_string()
}
