//! Error types for the babysitter pay calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration or
//! calculating pay.

use thiserror::Error;

/// The message reported when a shift ends before it starts.
pub const INVALID_TIME_RANGE_MESSAGE: &str = "End time cannot be earler than start time.";

/// The main error type for the pay calculator.
///
/// # Example
///
/// ```
/// use babysitter_pay::error::EngineError;
///
/// let error = EngineError::InvalidTimeRange { start: 18, end: 17 };
/// assert_eq!(error.to_string(), "End time cannot be earler than start time.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was outside its allowed range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The shift ends before it starts (compared on the raw hours).
    #[error("End time cannot be earler than start time.")]
    InvalidTimeRange {
        /// The raw start hour.
        start: u32,
        /// The raw end hour.
        end: u32,
    },

    /// An hour input was not a wall-clock hour.
    #[error("Invalid {field} hour {hour}: must be between 0 and 23")]
    HourOutOfRange {
        /// Which input was out of range ("start", "end" or "bed").
        field: String,
        /// The rejected value.
        hour: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "rules.earliest_start_time".to_string(),
            message: "must be between 0 and 23".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'rules.earliest_start_time': must be between 0 and 23"
        );
    }

    #[test]
    fn test_invalid_time_range_matches_legacy_message() {
        let error = EngineError::InvalidTimeRange { start: 20, end: 19 };
        assert_eq!(error.to_string(), INVALID_TIME_RANGE_MESSAGE);
    }

    #[test]
    fn test_hour_out_of_range_displays_field_and_hour() {
        let error = EngineError::HourOutOfRange {
            field: "bed".to_string(),
            hour: 24,
        };
        assert_eq!(
            error.to_string(),
            "Invalid bed hour 24: must be between 0 and 23"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }
}
