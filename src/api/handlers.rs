//! HTTP request handlers for the pay calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::hour_options;
use crate::models::RawShift;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/hours", get(hours_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure onto an error response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::with_details(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
            "Send the shift as a JSON object",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error)
}

/// Handler for POST /calculate endpoint.
///
/// Responds `200` with the pay result, or `400` with the failed result when
/// the shift's hours are invalid.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let shift: RawShift = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let start_time = Instant::now();
    let result = state.calculator().calc_shift(&shift);
    let duration = start_time.elapsed();

    if result.success {
        info!(
            correlation_id = %correlation_id,
            start_hour = shift.start_hour,
            end_hour = shift.end_hour,
            bed_hour = ?shift.bed_hour,
            pay = %result.pay,
            duration_us = duration.as_micros(),
            "Calculation completed successfully"
        );
        (StatusCode::OK, Json(result)).into_response()
    } else {
        warn!(
            correlation_id = %correlation_id,
            start_hour = shift.start_hour,
            end_hour = shift.end_hour,
            bed_hour = ?shift.bed_hour,
            error = %result.message,
            "Calculation rejected"
        );
        (StatusCode::BAD_REQUEST, Json(result)).into_response()
    }
}

/// Handler for GET /hours endpoint.
///
/// Returns the selectable start, bedtime and end hours for the configured rules.
async fn hours_handler(State(state): State<AppState>) -> Response {
    let rules = &state.calculator().config().rules;
    info!(
        earliest_start_time = rules.earliest_start_time,
        latest_end_time = rules.latest_end_time,
        "Listing allowed hours"
    );

    (StatusCode::OK, Json(hour_options(rules))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    use crate::calculation::PayCalculator;
    use crate::models::{HourOptions, PayResult};

    fn create_test_router() -> Router {
        create_router(AppState::new(PayCalculator::new()))
    }

    async fn post_json(router: Router, body: String) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_calculate_returns_pay() {
        let request = CalculationRequest {
            start_hour: 18,
            end_hour: 3,
            bed_hour: Some(21),
        };
        let response = post_json(
            create_test_router(),
            serde_json::to_string(&request).unwrap(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: PayResult = serde_json::from_slice(&body).unwrap();

        assert!(result.success);
        assert_eq!(result.pay, Decimal::from(108));
    }

    #[tokio::test]
    async fn test_calculate_reversed_hours_returns_400_with_result() {
        let response = post_json(
            create_test_router(),
            r#"{"start_hour": 20, "end_hour": 19}"#.to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: PayResult = serde_json::from_slice(&body).unwrap();

        assert!(!result.success);
        assert_eq!(result.message, "End time cannot be earler than start time.");
        assert!(result.hours.is_none());
    }

    #[tokio::test]
    async fn test_calculate_missing_field_returns_validation_error() {
        let response = post_json(create_test_router(), r#"{"end_hour": 19}"#.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("start_hour"));
    }

    #[tokio::test]
    async fn test_calculate_malformed_json_returns_400() {
        let response = post_json(create_test_router(), "{ not json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_hours_lists_default_options() {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/hours")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let options: HourOptions = serde_json::from_slice(&body).unwrap();

        assert_eq!(options.start.len(), 12);
        assert_eq!(options.bed[0].value, None);
        assert_eq!(options.end.last().unwrap().label, "4 AM");
    }
}
