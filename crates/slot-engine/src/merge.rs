//! Merge overlapping or touching busy intervals.

use crate::interval::Interval;

/// Collapse a start-sorted interval sequence into a minimal disjoint,
/// sorted set of busy blocks, taking the running maximum end.
///
/// Touching intervals (`next.start == current.end`) ARE merged -- the
/// comparison is deliberately `<=`, not `<`, so no zero-length gap can
/// appear between adjacent busy blocks.
pub fn merge_intervals(sorted: Vec<Interval>) -> Vec<Interval> {
    let mut merged: Vec<Interval> = Vec::new();
    for interval in sorted {
        if let Some(last) = merged.last_mut() {
            if interval.start <= last.end {
                last.end = last.end.max(interval.end);
                continue;
            }
        }
        merged.push(interval);
    }
    merged
}
