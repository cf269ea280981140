//! The pay calculator.
//!
//! [`PayCalculator`] ties validation, normalization and partitioning together
//! and prices the resulting buckets with its configured rates.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{PartialRateConfig, RateConfig};
use crate::error::EngineResult;
use crate::models::{HourBreakdown, NormalizedShift, PayResult, RawShift, Validation};

use super::normalization::normalize;
use super::partition::partition;
use super::validation::{check_shift, validate_hours};

/// Calculates babysitting pay for single-night shifts.
///
/// The calculator only holds its immutable configuration, so it can be
/// shared freely and every call is independent of the ones before it.
///
/// # Examples
///
/// ```
/// use babysitter_pay::calculation::PayCalculator;
/// use rust_decimal::Decimal;
///
/// let calculator = PayCalculator::new();
///
/// // 6 PM until 3 AM, bedtime at 9 PM
/// let result = calculator.calc(18, 3, Some(21));
/// assert!(result.success);
/// assert_eq!(result.pay, Decimal::from(108));
/// assert_eq!(result.message, "3h@$12 +  3h@$8 + 3h@$16");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayCalculator {
    config: RateConfig,
}

impl PayCalculator {
    /// Creates a calculator with the default rates and rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator from a complete configuration.
    ///
    /// Returns `InvalidConfig` when an hour rule is not a wall-clock hour or
    /// a rate is negative.
    pub fn from_config(config: RateConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a calculator from overrides merged over the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use babysitter_pay::calculation::PayCalculator;
    /// use babysitter_pay::config::{PartialPayRates, PartialRateConfig};
    /// use rust_decimal::Decimal;
    ///
    /// let calculator = PayCalculator::with_overrides(&PartialRateConfig {
    ///     pay_rate: Some(PartialPayRates {
    ///         start_to_bedtime: Some(Decimal::from(15)),
    ///         ..Default::default()
    ///     }),
    ///     ..Default::default()
    /// })?;
    ///
    /// assert_eq!(calculator.calc(17, 18, Some(18)).pay, Decimal::from(15));
    /// # Ok::<(), babysitter_pay::error::EngineError>(())
    /// ```
    pub fn with_overrides(overrides: &PartialRateConfig) -> EngineResult<Self> {
        Self::from_config(RateConfig::default().merged(overrides))
    }

    /// Returns the configuration this calculator prices with.
    pub fn config(&self) -> &RateConfig {
        &self.config
    }

    /// Checks that the shift does not end before it starts.
    ///
    /// See [`validate_hours`](super::validate_hours).
    pub fn validate_hours(&self, start: u32, end: u32, bed: Option<u32>) -> Validation {
        validate_hours(start, end, bed)
    }

    /// Moves end and bedtime hours before the earliest start time onto the
    /// following day.
    pub fn normalize(&self, start: u32, end: u32, bed: Option<u32>) -> NormalizedShift {
        normalize(start, end, bed, self.config.rules.earliest_start_time)
    }

    /// Splits a shift into hours per priced bucket.
    ///
    /// Hour ordering is checked after normalization, so an end hour after
    /// midnight is accepted with an evening start. Returns `HourOutOfRange`
    /// or `InvalidTimeRange` for hours that cannot form a shift.
    pub fn calc_hours(&self, start: u32, end: u32, bed: Option<u32>) -> EngineResult<HourBreakdown> {
        let shift = check_shift(
            &RawShift::new(start, end, bed),
            self.config.rules.earliest_start_time,
        )?;
        Ok(partition(&shift))
    }

    /// Calculates the pay for a shift.
    ///
    /// Invalid hours never produce an error: the result has `success` unset,
    /// zero pay and the reason in `message`.
    pub fn calc(&self, start: u32, end: u32, bed: Option<u32>) -> PayResult {
        let hours = match self.calc_hours(start, end, bed) {
            Ok(hours) => hours,
            Err(err) => {
                debug!(start, end, bed = ?bed, error = %err, "Rejected shift");
                return PayResult::failure(err.to_string());
            }
        };

        let pay = self.price(&hours);
        debug!(start, end, bed = ?bed, hours = ?hours, pay = %pay, "Calculated shift pay");

        PayResult {
            success: true,
            message: self.describe(&hours),
            pay,
            hours: Some(hours),
        }
    }

    /// Calculates the pay for a [`RawShift`].
    pub fn calc_shift(&self, shift: &RawShift) -> PayResult {
        self.calc(shift.start_hour, shift.end_hour, shift.bed_hour)
    }

    /// Weights each bucket by its hourly rate.
    pub fn price(&self, hours: &HourBreakdown) -> Decimal {
        let rates = &self.config.pay_rate;

        Decimal::from(hours.pre_bedtime) * rates.start_to_bedtime
            + Decimal::from(hours.bedtime_to_midnight) * rates.bedtime_to_midnight
            + Decimal::from(hours.midnight_to_end) * rates.midnight_to_end
    }

    /// Formats the breakdown as `"<h>h@$<rate> +  <h>h@$<rate> + <h>h@$<rate>"`.
    ///
    /// The double space after the first `+` is kept for compatibility with
    /// existing consumers of the message.
    pub fn describe(&self, hours: &HourBreakdown) -> String {
        let rates = &self.config.pay_rate;

        format!(
            "{}h@${} +  {}h@${} + {}h@${}",
            hours.pre_bedtime,
            rates.start_to_bedtime.normalize(),
            hours.bedtime_to_midnight,
            rates.bedtime_to_midnight.normalize(),
            hours.midnight_to_end,
            rates.midnight_to_end.normalize()
        )
    }
}
