//! Hour normalization onto a single continuous scale.
//!
//! The configured earliest start time acts as the day boundary: an end or
//! bedtime hour below it is taken to fall after midnight and is moved to the
//! following day by adding 24. The start hour defines the reference day and
//! is never moved.

use crate::models::NormalizedShift;

/// Hours in a day; also midnight on the normalized scale.
pub const HOURS_PER_DAY: u32 = 24;

/// Moves `hour` to the following day when it is before `day_boundary`.
fn roll_past_midnight(hour: u32, day_boundary: u32) -> u32 {
    if hour < day_boundary {
        hour + HOURS_PER_DAY
    } else {
        hour
    }
}

/// Normalizes a shift's hours relative to `day_boundary`.
///
/// A missing bedtime is treated as hour `0`, which lands at midnight of the
/// following day whenever the boundary is above zero.
///
/// # Examples
///
/// ```
/// use babysitter_pay::calculation::normalize;
///
/// // 6 PM until 3 AM, bedtime 9 PM, day starting at 5 PM
/// let shift = normalize(18, 3, Some(21), 17);
/// assert_eq!((shift.start, shift.end, shift.bed), (18, 27, 21));
///
/// // No bedtime: bedtime becomes midnight
/// let shift = normalize(18, 23, None, 17);
/// assert_eq!(shift.bed, 24);
/// ```
pub fn normalize(start: u32, end: u32, bed: Option<u32>, day_boundary: u32) -> NormalizedShift {
    let bed = bed.unwrap_or(0);

    NormalizedShift {
        start,
        end: roll_past_midnight(end, day_boundary),
        bed: roll_past_midnight(bed, day_boundary),
    }
}
