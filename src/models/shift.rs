//! Shift models.
//!
//! This module defines the [`RawShift`] supplied by callers and the
//! [`NormalizedShift`] derived from it, where hours after midnight are
//! shifted onto a single continuous scale.

use serde::{Deserialize, Serialize};

/// A shift as entered by the caller, in wall-clock hours (0-23).
///
/// # Example
///
/// ```
/// use babysitter_pay::models::RawShift;
///
/// // 6 PM until 3 AM, bedtime at 9 PM
/// let shift = RawShift::new(18, 3, Some(21));
/// assert_eq!(shift.bed_hour, Some(21));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawShift {
    /// The hour the shift starts.
    pub start_hour: u32,
    /// The hour the shift ends.
    pub end_hour: u32,
    /// The children's bedtime, if one was given.
    #[serde(default)]
    pub bed_hour: Option<u32>,
}

impl RawShift {
    /// Creates a new raw shift.
    pub fn new(start_hour: u32, end_hour: u32, bed_hour: Option<u32>) -> Self {
        Self {
            start_hour,
            end_hour,
            bed_hour,
        }
    }
}

/// A shift on the normalized scale, where `24` is midnight and hours of the
/// following day run from `24` to `47`.
///
/// `start` is always the raw start hour; only `end` and `bed` are moved to
/// the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedShift {
    /// The start hour, never shifted.
    pub start: u32,
    /// The end hour, plus 24 when it falls on the following day.
    pub end: u32,
    /// The bedtime hour, plus 24 when it falls on the following day.
    pub bed: u32,
}

impl NormalizedShift {
    /// Returns the length of the shift in whole hours.
    ///
    /// Zero for a shift whose end precedes its start.
    pub fn worked_hours(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}
