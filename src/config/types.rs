//! Configuration types for pay calculation.
//!
//! [`RateConfig`] is the complete, validated configuration a calculator runs
//! with. [`PartialRateConfig`] mirrors its shape with every leaf optional and
//! is what callers and YAML files supply as overrides.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The latest valid wall-clock hour.
pub const LAST_HOUR: u32 = 23;

/// Rules restricting which hours a shift may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRules {
    /// The earliest hour a shift may start (0-23). Also the day boundary used
    /// when normalizing: hours below it belong to the following day.
    pub earliest_start_time: u32,
    /// The latest hour a shift may end (0-23), usually after midnight.
    pub latest_end_time: u32,
}

impl Default for HourRules {
    fn default() -> Self {
        Self {
            earliest_start_time: 17,
            latest_end_time: 4,
        }
    }
}

/// Hourly rates for each bucket of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRates {
    /// Rate from the start of the shift until bedtime.
    pub start_to_bedtime: Decimal,
    /// Rate from bedtime until midnight.
    pub bedtime_to_midnight: Decimal,
    /// Rate from midnight until the end of the shift.
    pub midnight_to_end: Decimal,
}

impl Default for PayRates {
    fn default() -> Self {
        Self {
            start_to_bedtime: Decimal::from(12),
            bedtime_to_midnight: Decimal::from(8),
            midnight_to_end: Decimal::from(16),
        }
    }
}

/// The complete configuration for a [`PayCalculator`](crate::calculation::PayCalculator).
///
/// # Example
///
/// ```
/// use babysitter_pay::config::RateConfig;
/// use rust_decimal::Decimal;
///
/// let config = RateConfig::default();
/// assert_eq!(config.rules.earliest_start_time, 17);
/// assert_eq!(config.pay_rate.midnight_to_end, Decimal::from(16));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Allowed-hour rules.
    pub rules: HourRules,
    /// Hourly rates.
    pub pay_rate: PayRates,
}

/// Optional overrides for [`HourRules`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialHourRules {
    /// Overrides [`HourRules::earliest_start_time`].
    pub earliest_start_time: Option<u32>,
    /// Overrides [`HourRules::latest_end_time`].
    pub latest_end_time: Option<u32>,
}

/// Optional overrides for [`PayRates`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialPayRates {
    /// Overrides [`PayRates::start_to_bedtime`].
    pub start_to_bedtime: Option<Decimal>,
    /// Overrides [`PayRates::bedtime_to_midnight`].
    pub bedtime_to_midnight: Option<Decimal>,
    /// Overrides [`PayRates::midnight_to_end`].
    pub midnight_to_end: Option<Decimal>,
}

/// A partial configuration, merged group by group and leaf by leaf over a
/// base [`RateConfig`].
///
/// # Example
///
/// ```
/// use babysitter_pay::config::{PartialPayRates, PartialRateConfig, RateConfig};
/// use rust_decimal::Decimal;
///
/// let overrides = PartialRateConfig {
///     pay_rate: Some(PartialPayRates {
///         midnight_to_end: Some(Decimal::from(20)),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
///
/// let config = RateConfig::default().merged(&overrides);
/// assert_eq!(config.pay_rate.midnight_to_end, Decimal::from(20));
/// assert_eq!(config.pay_rate.start_to_bedtime, Decimal::from(12));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialRateConfig {
    /// Overrides for the hour rules.
    pub rules: Option<PartialHourRules>,
    /// Overrides for the pay rates.
    pub pay_rate: Option<PartialPayRates>,
}

impl HourRules {
    fn merged(self, overrides: &PartialHourRules) -> Self {
        Self {
            earliest_start_time: overrides
                .earliest_start_time
                .unwrap_or(self.earliest_start_time),
            latest_end_time: overrides.latest_end_time.unwrap_or(self.latest_end_time),
        }
    }
}

impl PayRates {
    fn merged(self, overrides: &PartialPayRates) -> Self {
        Self {
            start_to_bedtime: overrides.start_to_bedtime.unwrap_or(self.start_to_bedtime),
            bedtime_to_midnight: overrides
                .bedtime_to_midnight
                .unwrap_or(self.bedtime_to_midnight),
            midnight_to_end: overrides.midnight_to_end.unwrap_or(self.midnight_to_end),
        }
    }
}

impl RateConfig {
    /// Returns a copy of this configuration with every present override applied.
    pub fn merged(&self, overrides: &PartialRateConfig) -> Self {
        Self {
            rules: match &overrides.rules {
                Some(rules) => self.rules.merged(rules),
                None => self.rules,
            },
            pay_rate: match &overrides.pay_rate {
                Some(rates) => self.pay_rate.merged(rates),
                None => self.pay_rate,
            },
        }
    }

    /// Checks that hours are wall-clock hours and rates are non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        check_hour("rules.earliest_start_time", self.rules.earliest_start_time)?;
        check_hour("rules.latest_end_time", self.rules.latest_end_time)?;

        check_rate("pay_rate.start_to_bedtime", self.pay_rate.start_to_bedtime)?;
        check_rate(
            "pay_rate.bedtime_to_midnight",
            self.pay_rate.bedtime_to_midnight,
        )?;
        check_rate("pay_rate.midnight_to_end", self.pay_rate.midnight_to_end)?;

        Ok(())
    }
}

fn check_hour(field: &str, hour: u32) -> EngineResult<()> {
    if hour > LAST_HOUR {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("{} is not between 0 and {}", hour, LAST_HOUR),
        });
    }
    Ok(())
}

fn check_rate(field: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("rate ${} cannot be negative", rate),
        });
    }
    Ok(())
}
