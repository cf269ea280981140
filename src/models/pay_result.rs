//! Calculation result models.
//!
//! This module contains the [`HourBreakdown`] of a shift into priced buckets,
//! the [`Validation`] outcome of checking a shift's hours, and the
//! [`PayResult`] returned to callers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whole hours worked in each priced bucket of a shift.
///
/// # Example
///
/// ```
/// use babysitter_pay::models::HourBreakdown;
///
/// let hours = HourBreakdown {
///     pre_bedtime: 3,
///     bedtime_to_midnight: 3,
///     midnight_to_end: 3,
/// };
/// assert_eq!(hours.total(), 9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HourBreakdown {
    /// Hours from the start of the shift until bedtime.
    pub pre_bedtime: u32,
    /// Hours from bedtime until midnight.
    pub bedtime_to_midnight: u32,
    /// Hours from midnight until the end of the shift.
    pub midnight_to_end: u32,
}

impl HourBreakdown {
    /// Returns the total hours across all buckets.
    pub fn total(&self) -> u32 {
        self.pre_bedtime + self.bedtime_to_midnight + self.midnight_to_end
    }
}

/// The outcome of validating a shift's hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// Whether the hours are acceptable.
    pub success: bool,
    /// Why the hours were rejected; empty on success.
    pub message: String,
}

impl Validation {
    /// A successful validation.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: String::new(),
        }
    }

    /// A failed validation with the given message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// The result of a pay calculation.
///
/// Callers must check `success` before trusting the other fields: a failed
/// result carries the reason in `message`, zero `pay` and no `hours`.
///
/// # Example
///
/// ```
/// use babysitter_pay::models::PayResult;
///
/// let result = PayResult::failure("End time cannot be earler than start time.");
/// assert!(!result.success);
/// assert!(result.pay.is_zero());
/// assert!(result.hours.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResult {
    /// Whether the calculation succeeded.
    pub success: bool,
    /// The per-bucket breakdown on success, or the error message on failure.
    pub message: String,
    /// The total pay.
    pub pay: Decimal,
    /// The hours worked in each bucket; absent on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<HourBreakdown>,
}

impl PayResult {
    /// Creates a failed result with the given message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            pay: Decimal::ZERO,
            hours: None,
        }
    }
}
