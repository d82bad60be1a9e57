//! Busy-interval parsing and flattening.
//!
//! Converts the wire representation (ISO-8601 strings with a `Z` UTC suffix)
//! into concrete `DateTime<Utc>` intervals, and flattens the per-participant
//! schedules into one sequence sorted by start time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A busy interval as supplied by a host application.
///
/// Timestamps are ISO-8601 strings with a literal `Z` UTC marker
/// (e.g., `"2023-10-17T09:00:00Z"`). `start <= end` is assumed, not
/// validated; an inverted interval has negative length and can never
/// satisfy a positive duration downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: String,
    pub end: String,
}

/// A concrete time interval, second precision, UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Parse an ISO-8601 timestamp with a `Z` (or numeric offset) suffix.
///
/// # Errors
/// Returns `SlotError::InvalidTimestamp` if the string is not valid ISO-8601.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| SlotError::InvalidTimestamp(s.to_string()))
}

/// Format a timestamp back to the wire form: second precision, trailing `Z`,
/// no sub-second component.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Flatten every busy interval from every participant's schedule into a
/// single sequence sorted ascending by start time (then by end, for
/// stability).
///
/// Schedules are not assumed pre-sorted or pre-merged.
///
/// # Errors
/// Returns `SlotError::InvalidTimestamp` on the first unparseable timestamp.
pub fn flatten_and_sort(schedules: &[Vec<BusyInterval>]) -> Result<Vec<Interval>> {
    let mut intervals = Vec::new();
    for schedule in schedules {
        for busy in schedule {
            intervals.push(Interval {
                start: parse_timestamp(&busy.start)?,
                end: parse_timestamp(&busy.end)?,
            });
        }
    }
    intervals.sort_by_key(|iv| (iv.start, iv.end));
    Ok(intervals)
}
