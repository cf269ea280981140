//! Configuration loading and management for the pay calculator.
//!
//! This module provides the typed rate table and hour rules, the partial
//! overrides merged over them, and a loader for YAML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use babysitter_pay::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default.yaml").unwrap();
//! println!("Bedtime rate: ${}", loader.config().pay_rate.bedtime_to_midnight);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HourRules, LAST_HOUR, PartialHourRules, PartialPayRates, PartialRateConfig, PayRates,
    RateConfig,
};
