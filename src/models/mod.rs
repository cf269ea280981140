//! Core data models for the pay calculator.
//!
//! This module contains all the domain models used throughout the crate.

mod hour_option;
mod pay_result;
mod shift;

pub use hour_option::{HourOption, HourOptions};
pub use pay_result::{HourBreakdown, PayResult, Validation};
pub use shift::{NormalizedShift, RawShift};
