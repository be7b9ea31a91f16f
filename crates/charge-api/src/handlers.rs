//! # Request Handlers
//!
//! Axum request handlers for station listing and the payment simulation.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use charge_core::{
    ChargeError, PaymentConfirmation, PaymentIntent, PaymentIntentRequest, PaymentResult,
    PaymentStrategy, StationStore, StationView,
};
use chrono::{Timelike, Utc};
use serde::Serialize;
use tracing::{error, info, instrument, warn};

// =============================================================================
// Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Station listing response
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationView>,
    pub count: usize,
}

/// Store diagnostics response
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub store: String,
    pub connection_status: String,
    pub collections: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_count: Option<usize>,
    pub environment: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn charge_error_to_response(err: ChargeError) -> ApiError {
    let code = err.status_code();
    let mut response = ErrorResponse::new(err.to_string(), code);
    if let ChargeError::Validation { field, .. } = &err {
        response = response.with_details(format!("field: {}", field));
    }
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

fn json_rejection_to_response(rejection: JsonRejection) -> ApiError {
    let status = rejection.status();
    warn!("Rejected request body: {}", rejection.body_text());
    let response = ErrorResponse::new("Invalid request body", status.as_u16())
        .with_details(rejection.body_text());
    (status, Json(response))
}

// =============================================================================
// Handlers
// =============================================================================

/// Root liveness message
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "ChargeTunis backend running"
    }))
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "charge-tunis",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List all stations with their simulated free connectors
#[instrument(skip(state))]
pub async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<StationsResponse>, ApiError> {
    let records = state.store.list().await.map_err(|e| {
        error!("Failed to list stations: {}", e);
        charge_error_to_response(e)
    })?;

    // One clock read per request so every station sees the same second
    let second = Utc::now().second();
    let stations: Vec<StationView> = records.into_iter().map(|r| r.view_at(second)).collect();

    Ok(Json(StationsResponse {
        count: stations.len(),
        stations,
    }))
}

/// Create a payment intent
#[instrument(skip(state, payload))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    payload: Result<Json<PaymentIntentRequest>, JsonRejection>,
) -> Result<Json<PaymentIntent>, ApiError> {
    let Json(request) = payload.map_err(json_rejection_to_response)?;

    let intent = state
        .strategy
        .create_intent(&request)
        .await
        .map_err(|e| {
            error!("Failed to create payment intent: {}", e);
            charge_error_to_response(e)
        })?;

    Ok(Json(intent))
}

/// Confirm a payment. A declined card is still a 200 with `status: failed`.
#[instrument(skip(state, payload))]
pub async fn confirm_payment(
    State(state): State<AppState>,
    payload: Result<Json<PaymentConfirmation>, JsonRejection>,
) -> Result<Json<PaymentResult>, ApiError> {
    let Json(confirmation) = payload.map_err(json_rejection_to_response)?;

    let result = state
        .strategy
        .confirm(&confirmation)
        .await
        .map_err(|e| {
            error!("Failed to confirm payment: {}", e);
            charge_error_to_response(e)
        })?;

    info!(
        "Confirmation via {}: {:?}",
        state.strategy.provider_name(),
        result.status
    );
    Ok(Json(result))
}

/// Report store connectivity and contents
pub async fn diagnostics(State(state): State<AppState>) -> impl IntoResponse {
    let collections = state.store.collections().await;
    let count = state.store.count().await;

    let (connection_status, collections) = match collections {
        Ok(mut names) => {
            names.truncate(10);
            ("connected".to_string(), names)
        }
        Err(e) => (format!("error: {}", e), Vec::new()),
    };

    Json(DiagnosticsResponse {
        backend: "running".to_string(),
        store: state.store.kind().to_string(),
        connection_status,
        collections,
        station_count: count.ok(),
        environment: state.config.environment.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error", 400);
        assert_eq!(err.error, "Test error");
        assert_eq!(err.code, 400);
        assert!(err.details.is_none());
    }

    #[test]
    fn test_validation_error_conversion() {
        let err = ChargeError::validation("kwh", "must be greater than 0");
        let (status, Json(body)) = charge_error_to_response(err);
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, 422);
        assert_eq!(body.details.as_deref(), Some("field: kwh"));
    }

    #[test]
    fn test_store_error_conversion() {
        let (status, _json) = charge_error_to_response(ChargeError::Store("offline".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
