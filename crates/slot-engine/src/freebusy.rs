//! Free-gap derivation against a single-day window.
//!
//! The complement of the merged busy timeline: the ordered gaps before the
//! first busy block, between consecutive blocks, and after the last block,
//! bounded by `[day_start, day_end)`.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::interval::Interval;

/// The `[midnight, midnight + 24h)` window on the UTC calendar date of the
/// given instant.
pub fn day_window(anchor: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let day_start = anchor.date_naive().and_time(NaiveTime::MIN).and_utc();
    (day_start, day_start + Duration::days(1))
}

/// Derive the ordered free gaps between merged busy blocks within the window.
///
/// Emits a leading gap only if the first block starts after `day_start`, an
/// interior gap only where `curr.start > prev.end` (merge already collapsed
/// touching blocks, so no zero-length gaps arise), and a trailing gap only if
/// the last block ends before `day_end`. A timeline covering the whole window
/// yields no gaps.
///
/// The window is a single 24-hour span: busy blocks on a later calendar date
/// than the anchor are still subtracted against this one window and
/// contribute nothing inside it. That is a scope limitation of the design,
/// kept as-is.
pub fn find_free_intervals(
    merged: &[Interval],
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
) -> Vec<Interval> {
    let mut free = Vec::new();
    let Some(first) = merged.first() else {
        return free;
    };

    if first.start > day_start {
        free.push(Interval {
            start: day_start,
            end: first.start,
        });
    }

    for pair in merged.windows(2) {
        if pair[1].start > pair[0].end {
            free.push(Interval {
                start: pair[0].end,
                end: pair[1].start,
            });
        }
    }

    // last() is Some whenever first() was.
    if let Some(last) = merged.last() {
        if last.end < day_end {
            free.push(Interval {
                start: last.end,
                end: day_end,
            });
        }
    }

    free
}
