//! HTTP request handlers for the wage engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_daily_pay, compute_weekly_payroll};
use crate::error::EngineError;
use crate::models::ShiftInput;

use super::request::{DailyPayRequest, WeeklyPayrollRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/daily-pay", post(daily_pay_handler))
        .route("/weekly-payroll", post(weekly_payroll_handler))
        .with_state(state)
}

/// Handler for POST /daily-pay endpoint.
///
/// Accepts one day's clock times and returns the computed pay.
async fn daily_pay_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailyPayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily pay request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let input = match ShiftInput::try_from(request) {
        Ok(input) => input,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let start_time = Instant::now();
    match compute_daily_pay(state.config(), &input) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                day = result.day.number(),
                pay_rule = result.pay_rule.rule_id(),
                total_daily_pay = %result.total_daily_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Daily pay computed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /weekly-payroll endpoint.
///
/// Accepts several days for one employee and returns per-day outcomes with
/// weekly totals. A day that cannot be computed is reported in the body
/// and does not fail the request.
async fn weekly_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeeklyPayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let (employee_name, entries) = match request.into_entries() {
        Ok(parts) => parts,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let start_time = Instant::now();
    match compute_weekly_payroll(state.config(), &employee_name, &entries) {
        Ok(payroll) => {
            info!(
                correlation_id = %correlation_id,
                days_computed = payroll.totals.days_computed,
                days_failed = payroll.totals.days_failed,
                total_pay = %payroll.totals.total_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Weekly payroll computed"
            );
            json_response(StatusCode::OK, payroll)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = err.code(),
        error = %err,
        "Computation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollConfig;
    use crate::models::{PayRule, ShiftResult, WeeklyPayroll};
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_daily_pay_returns_200() {
        let router = create_router(AppState::default());
        let body = r#"{"day": 1, "employee_name": "Ana", "start_time": "0900", "end_time": "2000"}"#;

        let (status, body) = post_json(router, "/daily-pay", body).await;
        assert_eq!(status, StatusCode::OK);

        let result: ShiftResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.pay_rule, PayRule::RegularDayOvertime);
        assert_eq!(result.total_daily_pay, dec("656.25"));
    }

    #[tokio::test]
    async fn test_daily_pay_uses_state_config() {
        let config = PayrollConfig::new(Decimal::from(800), 8).unwrap();
        let router = create_router(AppState::new(config));
        let body = r#"{"day": 1, "employee_name": "Ana", "start_time": "0900", "end_time": "1800"}"#;

        let (status, body) = post_json(router, "/daily-pay", body).await;
        assert_eq!(status, StatusCode::OK);

        let result: ShiftResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.total_daily_pay, Decimal::from(800));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(AppState::default());
        let (status, body) = post_json(router, "/daily-pay", "{invalid json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(AppState::default());
        let body = r#"{"day": 1, "employee_name": "Ana", "start_time": "0900"}"#;

        let (status, body) = post_json(router, "/daily-pay", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("end_time"));
    }

    #[tokio::test]
    async fn test_unsupported_combination_returns_422() {
        let router = create_router(AppState::default());
        let body = r#"{"day": 2, "employee_name": "Ana", "start_time": "0900", "end_time": "1800", "holiday_type": "SNWH"}"#;

        let (status, body) = post_json(router, "/daily-pay", body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "UNSUPPORTED_COMBINATION");
    }

    #[tokio::test]
    async fn test_weekly_payroll_returns_200() {
        let router = create_router(AppState::default());
        let body = r#"{
            "employee_name": "Ana",
            "days": [
                {"day": 6, "start_time": "0900", "end_time": "2000"},
                {"day": 1, "start_time": "0900", "end_time": "1800"}
            ]
        }"#;

        let (status, body) = post_json(router, "/weekly-payroll", body).await;
        assert_eq!(status, StatusCode::OK);

        let payroll: WeeklyPayroll = serde_json::from_slice(&body).unwrap();
        assert_eq!(payroll.days[0].day().number(), 1);
        assert_eq!(payroll.totals.total_pay, dec("1211.25"));
    }

    #[tokio::test]
    async fn test_weekly_payroll_duplicate_day_returns_400() {
        let router = create_router(AppState::default());
        let body = r#"{
            "employee_name": "Ana",
            "days": [
                {"day": 3, "start_time": "0900", "end_time": "1800"},
                {"day": 3, "start_time": "0900", "end_time": "2000"}
            ]
        }"#;

        let (status, body) = post_json(router, "/weekly-payroll", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "DUPLICATE_DAY");
    }
}
