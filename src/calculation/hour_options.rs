//! Allowed-hour option lists for shift entry forms.
//!
//! The selectable hours run from the earliest start time through the latest
//! end time, wrapping past midnight when the latest end time is earlier in
//! the day than the earliest start.

use chrono::NaiveTime;

use crate::config::HourRules;
use crate::models::{HourOption, HourOptions};

use super::normalization::HOURS_PER_DAY;

/// Label for the empty bedtime entry.
pub const NO_BEDTIME_LABEL: &str = "None specified";

/// Returns the wall-clock hours a shift may use, in shift order.
///
/// # Examples
///
/// ```
/// use babysitter_pay::calculation::allowed_hours;
/// use babysitter_pay::config::HourRules;
///
/// let hours = allowed_hours(&HourRules::default());
/// assert_eq!(hours, vec![17, 18, 19, 20, 21, 22, 23, 0, 1, 2, 3, 4]);
/// ```
pub fn allowed_hours(rules: &HourRules) -> Vec<u32> {
    let first = rules.earliest_start_time;
    let last = if rules.latest_end_time < rules.earliest_start_time {
        rules.latest_end_time + HOURS_PER_DAY
    } else {
        rules.latest_end_time
    };

    (first..=last).map(|hour| hour % HOURS_PER_DAY).collect()
}

/// Formats an hour as a 12-hour clock label.
///
/// Hours past 23 wrap onto the following day.
///
/// # Examples
///
/// ```
/// use babysitter_pay::calculation::display_hour;
///
/// assert_eq!(display_hour(0), "12 AM");
/// assert_eq!(display_hour(12), "12 PM");
/// assert_eq!(display_hour(17), "5 PM");
/// assert_eq!(display_hour(26), "2 AM");
/// ```
pub fn display_hour(hour: u32) -> String {
    NaiveTime::from_hms_opt(hour % HOURS_PER_DAY, 0, 0)
        .map(|time| time.format("%-I %p").to_string())
        .unwrap_or_default()
}

fn option_for(hour: u32) -> HourOption {
    HourOption {
        value: Some(hour),
        label: display_hour(hour),
    }
}

/// Builds the start, bedtime and end option lists for the given rules.
///
/// The bedtime list starts with a [`NO_BEDTIME_LABEL`] entry without a value.
pub fn hour_options(rules: &HourRules) -> HourOptions {
    let options: Vec<HourOption> = allowed_hours(rules).into_iter().map(option_for).collect();

    let mut bed = Vec::with_capacity(options.len() + 1);
    bed.push(HourOption {
        value: None,
        label: NO_BEDTIME_LABEL.to_string(),
    });
    bed.extend(options.iter().cloned());

    HourOptions {
        start: options.clone(),
        bed,
        end: options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_hours_without_wraparound() {
        let rules = HourRules {
            earliest_start_time: 9,
            latest_end_time: 12,
        };
        assert_eq!(allowed_hours(&rules), vec![9, 10, 11, 12]);
    }

    #[test]
    fn test_allowed_hours_single_hour() {
        let rules = HourRules {
            earliest_start_time: 20,
            latest_end_time: 20,
        };
        assert_eq!(allowed_hours(&rules), vec![20]);
    }

    #[test]
    fn test_allowed_hours_wraps_at_midnight() {
        let rules = HourRules {
            earliest_start_time: 22,
            latest_end_time: 1,
        };
        assert_eq!(allowed_hours(&rules), vec![22, 23, 0, 1]);
    }

    #[test]
    fn test_display_hour_covers_whole_day() {
        let labels: Vec<String> = (0..24).map(display_hour).collect();
        assert_eq!(labels[0], "12 AM");
        assert_eq!(labels[1], "1 AM");
        assert_eq!(labels[11], "11 AM");
        assert_eq!(labels[12], "12 PM");
        assert_eq!(labels[13], "1 PM");
        assert_eq!(labels[23], "11 PM");
    }

    #[test]
    fn test_hour_options_default_rules() {
        let options = hour_options(&HourRules::default());

        assert_eq!(options.start.len(), 12);
        assert_eq!(options.end, options.start);
        assert_eq!(options.bed.len(), 13);

        assert_eq!(options.bed[0].value, None);
        assert_eq!(options.bed[0].label, NO_BEDTIME_LABEL);

        assert_eq!(options.start[0].value, Some(17));
        assert_eq!(options.start[0].label, "5 PM");
        assert_eq!(options.end[11].value, Some(4));
        assert_eq!(options.end[11].label, "4 AM");
    }
}
