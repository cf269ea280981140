//! Application state for the pay calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::PayCalculator;
use crate::config::ConfigLoader;
use crate::error::EngineResult;

/// Shared application state.
///
/// Holds the calculator built from the loaded configuration. The calculator
/// is read-only, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<PayCalculator>,
}

impl AppState {
    /// Creates a new application state around the given calculator.
    pub fn new(calculator: PayCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }

    /// Creates a new application state from a loaded configuration.
    pub fn from_loader(loader: &ConfigLoader) -> EngineResult<Self> {
        Ok(Self::new(PayCalculator::from_config(*loader.config())?))
    }

    /// Returns the shared calculator.
    pub fn calculator(&self) -> &PayCalculator {
        &self.calculator
    }
}
