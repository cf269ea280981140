//! Partitioning of a normalized shift into priced buckets.
//!
//! The shift is cut at two boundaries, bedtime and midnight (hour 24 on the
//! normalized scale). Each bucket is computed from a few named comparisons
//! against those boundaries, and for every shift with `start <= end` and
//! `start <= 23` the buckets add up to the shift length.

use crate::models::{HourBreakdown, NormalizedShift};

use super::normalization::HOURS_PER_DAY;

/// Midnight of the reference day on the normalized scale.
pub const MIDNIGHT: u32 = HOURS_PER_DAY;

/// Hours from `lower` up to `upper`, or zero when the interval is empty.
fn span(lower: u32, upper: u32) -> u32 {
    upper.saturating_sub(lower)
}

/// Hours billed before bedtime.
///
/// Capped at midnight: hours after midnight are always billed at the
/// midnight rate, even when bedtime is later.
fn pre_bedtime_hours(shift: &NormalizedShift) -> u32 {
    let bedtime_at_or_before_start = shift.bed <= shift.start;
    let ends_before_bedtime = shift.end < shift.bed;

    if bedtime_at_or_before_start {
        0
    } else if ends_before_bedtime {
        span(shift.start, shift.end.min(MIDNIGHT))
    } else {
        span(shift.start, shift.bed.min(MIDNIGHT))
    }
}

/// Hours billed between bedtime and midnight.
fn bedtime_to_midnight_hours(shift: &NormalizedShift) -> u32 {
    let bedtime_at_or_after_midnight = shift.bed >= MIDNIGHT;
    let ends_at_or_before_bedtime = shift.end <= shift.bed;

    if bedtime_at_or_after_midnight || ends_at_or_before_bedtime {
        return 0;
    }

    // Asleep from the start when bedtime has already passed.
    let lower = shift.bed.max(shift.start);
    let upper = shift.end.min(MIDNIGHT);
    span(lower, upper)
}

/// Hours billed after midnight.
fn midnight_to_end_hours(shift: &NormalizedShift) -> u32 {
    let ends_at_or_before_midnight = shift.end <= MIDNIGHT;
    let starts_after_midnight = shift.start > MIDNIGHT;

    if ends_at_or_before_midnight {
        0
    } else if starts_after_midnight {
        span(shift.start, shift.end)
    } else {
        span(MIDNIGHT, shift.end)
    }
}

/// Splits a normalized shift into its three priced buckets.
///
/// # Examples
///
/// ```
/// use babysitter_pay::calculation::partition;
/// use babysitter_pay::models::NormalizedShift;
///
/// // 6 PM until 3 AM with a 9 PM bedtime
/// let hours = partition(&NormalizedShift { start: 18, end: 27, bed: 21 });
/// assert_eq!(hours.pre_bedtime, 3);
/// assert_eq!(hours.bedtime_to_midnight, 3);
/// assert_eq!(hours.midnight_to_end, 3);
/// ```
pub fn partition(shift: &NormalizedShift) -> HourBreakdown {
    HourBreakdown {
        pre_bedtime: pre_bedtime_hours(shift),
        bedtime_to_midnight: bedtime_to_midnight_hours(shift),
        midnight_to_end: midnight_to_end_hours(shift),
    }
}
