//! Request types for the pay calculator API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::RawShift;

/// Request body for the `/calculate` endpoint.
///
/// Hours are wall-clock hours (0-23). `bed_hour` may be omitted or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The hour the shift starts.
    pub start_hour: u32,
    /// The hour the shift ends.
    pub end_hour: u32,
    /// The children's bedtime.
    #[serde(default)]
    pub bed_hour: Option<u32>,
}

impl From<CalculationRequest> for RawShift {
    fn from(req: CalculationRequest) -> Self {
        RawShift::new(req.start_hour, req.end_hour, req.bed_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{"start_hour": 18, "end_hour": 3, "bed_hour": 21}"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.start_hour, 18);
        assert_eq!(request.end_hour, 3);
        assert_eq!(request.bed_hour, Some(21));
    }

    #[test]
    fn test_deserialize_null_bedtime() {
        let json = r#"{"start_hour": 18, "end_hour": 23, "bed_hour": null}"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.bed_hour, None);
    }

    #[test]
    fn test_missing_start_hour_is_rejected() {
        let json = r#"{"end_hour": 23}"#;

        let result: Result<CalculationRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_conversion() {
        let req = CalculationRequest {
            start_hour: 17,
            end_hour: 19,
            bed_hour: None,
        };

        let shift: RawShift = req.into();
        assert_eq!(shift, RawShift::new(17, 19, None));
    }
}
