//! Calculation logic for the pay calculator.
//!
//! This module contains hour validation, normalization of after-midnight
//! hours, partitioning of a shift into priced buckets, the [`PayCalculator`]
//! that prices them, and the allowed-hour option lists for entry forms.

mod hour_options;
mod normalization;
mod partition;
mod pay_calculator;
mod validation;

pub use hour_options::{NO_BEDTIME_LABEL, allowed_hours, display_hour, hour_options};
pub use normalization::{HOURS_PER_DAY, normalize};
pub use partition::{MIDNIGHT, partition};
pub use pay_calculator::PayCalculator;
pub use validation::{check_shift, validate_hours};
