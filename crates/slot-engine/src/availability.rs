//! Slot selection and the public entry point.
//!
//! Carves fixed-duration slots from the start of each qualifying free gap
//! and orchestrates the full pipeline: flatten+sort, merge, complement,
//! filter/select.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::freebusy::{day_window, find_free_intervals};
use crate::interval::{flatten_and_sort, format_timestamp, BusyInterval, Interval};
use crate::merge::merge_intervals;

/// Hard cap on the number of slots emitted per computation.
pub const MAX_SLOTS: usize = 5;

/// A candidate meeting slot of exactly the requested duration, in the same
/// ISO-8601 `Z` wire encoding as the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: String,
    pub end: String,
}

/// Select up to [`MAX_SLOTS`] fixed-duration slots from the ordered free
/// gaps.
///
/// A gap qualifies when it is at least `duration_minutes` long; one slot is
/// carved from its start. Shorter gaps are skipped entirely -- no partial
/// slots, and a long gap never yields more than one slot.
pub fn select_slots(free: &[Interval], duration_minutes: i64) -> Vec<FreeSlot> {
    let duration = Duration::minutes(duration_minutes);
    let mut slots = Vec::new();
    for gap in free {
        if gap.end - gap.start >= duration {
            slots.push(FreeSlot {
                start: format_timestamp(gap.start),
                end: format_timestamp(gap.start + duration),
            });
            if slots.len() == MAX_SLOTS {
                break;
            }
        }
    }
    slots
}

/// Find common free slots of `duration_minutes` across all participants'
/// busy schedules, within the day of the earliest busy interval.
///
/// Returns `Ok(None)` when `schedules` is empty, when `duration_minutes`
/// is not positive, or when no gap is long enough -- all three are normal
/// outcomes, not faults. The free-time window is `[midnight, midnight+24h)`
/// on the UTC date of the earliest busy interval; hosts that need an
/// explicit window can call [`find_free_intervals`] directly.
///
/// # Errors
/// Returns `SlotError::InvalidTimestamp` if any timestamp in `schedules`
/// is not valid ISO-8601.
pub fn find_available_slots(
    schedules: &[Vec<BusyInterval>],
    duration_minutes: i64,
) -> Result<Option<Vec<FreeSlot>>> {
    if schedules.is_empty() || duration_minutes <= 0 {
        return Ok(None);
    }

    let busy = flatten_and_sort(schedules)?;
    let merged = merge_intervals(busy);
    let Some(first) = merged.first() else {
        // Participants exist but declared no busy time; with no anchor
        // interval there is no day window to carve slots from.
        return Ok(None);
    };

    let (day_start, day_end) = day_window(first.start);
    let free = find_free_intervals(&merged, day_start, day_end);
    let slots = select_slots(&free, duration_minutes);

    Ok(if slots.is_empty() { None } else { Some(slots) })
}
