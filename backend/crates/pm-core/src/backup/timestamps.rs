//! Date coercion for exported records.
//!
//! Exported records carry every date as text. The store keeps them as Unix
//! milliseconds, so each value is parsed back at insertion time. Accepted
//! forms, in order: RFC 3339 (`2024-03-01T09:30:00.000Z`), a naive
//! date-time assumed to be UTC (`2024-03-01T09:30:00`), and a bare date
//! (`2024-03-01`, midnight UTC).

use crate::{CoreError, Result as CoreResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use error_location::ErrorLocation;

#[track_caller]
pub fn parse_datetime(value: &str, field: &str) -> CoreResult<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc());
    }

    Err(CoreError::InvalidTimestamp {
        field: field.to_string(),
        value: value.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Empty strings are treated the same as an absent value.
#[track_caller]
pub fn parse_optional_datetime(
    value: Option<&str>,
    field: &str,
) -> CoreResult<Option<DateTime<Utc>>> {
    match value {
        Some(v) if !v.trim().is_empty() => parse_datetime(v, field).map(Some),
        _ => Ok(None),
    }
}

#[track_caller]
pub fn parse_millis(value: &str, field: &str) -> CoreResult<i64> {
    parse_datetime(value, field).map(|dt| dt.timestamp_millis())
}

#[track_caller]
pub fn parse_optional_millis(value: Option<&str>, field: &str) -> CoreResult<Option<i64>> {
    parse_optional_datetime(value, field).map(|dt| dt.map(|d| d.timestamp_millis()))
}
