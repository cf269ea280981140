//! Babysitter pay calculator
//!
//! This crate splits a single-night babysitting shift into hours before
//! bedtime, hours from bedtime to midnight and hours after midnight, and
//! prices each at its own hourly rate.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
