//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pay
//! configuration overrides from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{PartialRateConfig, RateConfig};

/// Loads and provides access to a validated pay configuration.
///
/// The YAML file holds a [`PartialRateConfig`]: any key may be left out and
/// falls back to the built-in default.
///
/// ```text
/// rules:
///   earliest_start_time: 17
///   latest_end_time: 4
/// pay_rate:
///   start_to_bedtime: 12
///   bedtime_to_midnight: 8
///   midnight_to_end: 16
/// ```
///
/// # Example
///
/// ```no_run
/// use babysitter_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default.yaml")?;
/// println!("Earliest start: {}", loader.config().rules.earliest_start_time);
/// # Ok::<(), babysitter_pay::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RateConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML or has unknown keys (`ConfigParseError`)
    /// - A merged value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, config = ?loader.config, "Loaded pay configuration");
        Ok(loader)
    }

    /// Parses configuration overrides from YAML text.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let overrides: PartialRateConfig = if content.trim().is_empty() {
            PartialRateConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?
        };

        Self::from_overrides(&overrides)
    }

    /// Merges overrides over the defaults and validates the result.
    pub fn from_overrides(overrides: &PartialRateConfig) -> EngineResult<Self> {
        let config = RateConfig::default().merged(overrides);
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &RateConfig {
        &self.config
    }
}
