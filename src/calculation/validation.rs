//! Shift hour validation.
//!
//! [`validate_hours`] compares the raw, unnormalized hours, so an end hour
//! after midnight is numerically below an evening start and fails.
//! [`check_shift`] is what the calculator uses: it compares the hours after
//! normalization, where an after-midnight end lands on the following day.

use crate::config::LAST_HOUR;
use crate::error::{EngineError, EngineResult, INVALID_TIME_RANGE_MESSAGE};
use crate::models::{NormalizedShift, RawShift, Validation};

use super::normalization::normalize;

/// Checks that a shift does not end before it starts.
///
/// Bedtime is accepted but not checked. Equal start and end hours are valid.
///
/// # Examples
///
/// ```
/// use babysitter_pay::calculation::validate_hours;
///
/// assert!(validate_hours(17, 18, None).success);
/// assert!(validate_hours(18, 18, None).success);
///
/// let result = validate_hours(18, 17, None);
/// assert!(!result.success);
/// assert_eq!(result.message, "End time cannot be earler than start time.");
/// ```
pub fn validate_hours(start: u32, end: u32, _bed: Option<u32>) -> Validation {
    if end < start {
        Validation::failed(INVALID_TIME_RANGE_MESSAGE)
    } else {
        Validation::ok()
    }
}

/// Checks every hour is a wall-clock hour, then normalizes the shift against
/// `day_boundary` and checks it does not end before it starts.
///
/// Range errors are reported before ordering errors, start first.
///
/// # Examples
///
/// ```
/// use babysitter_pay::calculation::check_shift;
/// use babysitter_pay::models::RawShift;
///
/// // 6 PM until 3 AM: the end falls on the following day
/// let shift = check_shift(&RawShift::new(18, 3, Some(21)), 17)?;
/// assert_eq!((shift.start, shift.end, shift.bed), (18, 27, 21));
///
/// // 8 PM until 7 PM the same evening
/// assert!(check_shift(&RawShift::new(20, 19, None), 17).is_err());
/// # Ok::<(), babysitter_pay::error::EngineError>(())
/// ```
pub fn check_shift(shift: &RawShift, day_boundary: u32) -> EngineResult<NormalizedShift> {
    check_hour("start", shift.start_hour)?;
    check_hour("end", shift.end_hour)?;
    if let Some(bed) = shift.bed_hour {
        check_hour("bed", bed)?;
    }

    let normalized = normalize(
        shift.start_hour,
        shift.end_hour,
        shift.bed_hour,
        day_boundary,
    );

    if !validate_hours(normalized.start, normalized.end, Some(normalized.bed)).success {
        return Err(EngineError::InvalidTimeRange {
            start: shift.start_hour,
            end: shift.end_hour,
        });
    }

    Ok(normalized)
}

fn check_hour(field: &str, hour: u32) -> EngineResult<()> {
    if hour > LAST_HOUR {
        return Err(EngineError::HourOutOfRange {
            field: field.to_string(),
            hour,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_before_end_is_valid() {
        assert!(validate_hours(17, 18, None).success);
    }

    #[test]
    fn test_start_equal_to_end_is_valid() {
        assert!(validate_hours(18, 18, None).success);
    }

    #[test]
    fn test_end_before_start_is_invalid() {
        let result = validate_hours(18, 17, None);
        assert!(!result.success);
        assert_eq!(result.message, INVALID_TIME_RANGE_MESSAGE);
    }

    #[test]
    fn test_after_midnight_end_is_compared_raw() {
        // 6 PM to 3 AM still fails the raw ordering check
        assert!(!validate_hours(18, 3, Some(21)).success);
    }

    #[test]
    fn test_bedtime_is_not_checked() {
        assert!(validate_hours(18, 20, Some(2)).success);
        assert!(validate_hours(18, 20, Some(99)).success);
    }

    #[test]
    fn test_success_iff_end_not_before_start() {
        for start in 0..=23 {
            for end in 0..=23 {
                assert_eq!(
                    validate_hours(start, end, None).success,
                    end >= start,
                    "start={} end={}",
                    start,
                    end
                );
            }
        }
    }

    #[test]
    fn test_check_shift_rejects_out_of_range_bedtime() {
        let result = check_shift(&RawShift::new(17, 20, Some(24)), 17);

        match result {
            Err(EngineError::HourOutOfRange { field, hour }) => {
                assert_eq!(field, "bed");
                assert_eq!(hour, 24);
            }
            other => panic!("Expected HourOutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_shift_reports_range_before_ordering() {
        let result = check_shift(&RawShift::new(30, 2, None), 17);
        assert!(matches!(
            result,
            Err(EngineError::HourOutOfRange { ref field, .. }) if field == "start"
        ));
    }

    #[test]
    fn test_check_shift_rejects_reversed_hours() {
        let result = check_shift(&RawShift::new(20, 19, None), 17);
        assert_eq!(
            result,
            Err(EngineError::InvalidTimeRange { start: 20, end: 19 })
        );
    }

    #[test]
    fn test_check_shift_accepts_missing_bedtime() {
        assert!(check_shift(&RawShift::new(17, 23, None), 17).is_ok());
    }

    #[test]
    fn test_check_shift_accepts_end_after_midnight() {
        let shift = check_shift(&RawShift::new(18, 3, Some(21)), 17).unwrap();
        assert_eq!(
            shift,
            NormalizedShift {
                start: 18,
                end: 27,
                bed: 21,
            }
        );
    }

    #[test]
    fn test_check_shift_rejects_only_ends_before_start_on_the_same_day() {
        let boundary = 17;
        for start in 0..=23 {
            for end in 0..=23 {
                let ends_next_day = end < boundary;
                assert_eq!(
                    check_shift(&RawShift::new(start, end, None), boundary).is_ok(),
                    end >= start || ends_next_day,
                    "start={} end={}",
                    start,
                    end
                );
            }
        }
    }

    #[test]
    fn test_check_shift_reports_raw_hours_when_reversed() {
        // 11 PM until 5 PM: both on the same evening
        let result = check_shift(&RawShift::new(23, 17, Some(1)), 17);
        assert_eq!(
            result,
            Err(EngineError::InvalidTimeRange { start: 23, end: 17 })
        );
    }
}
