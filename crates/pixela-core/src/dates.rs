use chrono::{Duration, NaiveDate};

use crate::errors::{CoreError, Result};

/// Wire format for calendar dates: 8 digits, zero padded, no separators,
/// no time-of-day or timezone component.
pub const WIRE_DATE_FORMAT: &str = "%Y%m%d";

/// Longest period the pixel-date listing reports, in days (inclusive).
pub const MAX_RANGE_DAYS: i64 = 365;

/// Format a calendar date for the wire, e.g. 2024-03-05 becomes "20240305".
pub fn format_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// Parse a wire date back into a calendar date.
pub fn parse_wire_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, WIRE_DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(s.to_string()))
}

/// Resolve the effective window a pixel-date listing covers.
///
/// Mirrors the service defaults:
/// - neither bound: the 365 days ending at `today`
/// - `from` only: 365 days forward from `from`
/// - `to` only: 365 days back from `to`
/// - both: exactly the given range, which must not exceed 365 days
pub fn resolve_window(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate)> {
    // 365 inclusive days span 364 day-steps.
    let span = Duration::days(MAX_RANGE_DAYS - 1);
    match (from, to) {
        (None, None) => Ok((today - span, today)),
        (Some(from), None) => Ok((from, from + span)),
        (None, Some(to)) => Ok((to - span, to)),
        (Some(from), Some(to)) => {
            validate_range(from, to)?;
            Ok((from, to))
        }
    }
}

/// Reject explicit ranges the service would refuse, before any request
/// is built.
pub fn validate_range(from: NaiveDate, to: NaiveDate) -> Result<()> {
    if from > to {
        return Err(CoreError::ValidationFailed(format!(
            "range start {from} is after range end {to}"
        )));
    }
    if (to - from).num_days() >= MAX_RANGE_DAYS {
        return Err(CoreError::ValidationFailed(format!(
            "range from {from} to {to} is longer than {MAX_RANGE_DAYS} days"
        )));
    }
    Ok(())
}
