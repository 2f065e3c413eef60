//! HTTP route handlers.
//!
//! Seat count is validated at this boundary before the predictor is
//! consulted; the gRPC adapter deliberately does not share that check.

use crate::models::{HealthResponse, PriceEstimate, TripRequest};
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use service_core::error::AppError;
use tracing::warn;
use validator::Validate;

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the price prediction API for the ride-sharing service"
    }))
}

pub async fn predict(
    State(state): State<AppState>,
    Json(trip): Json<TripRequest>,
) -> Result<Json<PriceEstimate>, AppError> {
    trip.validate()?;

    let estimate = state
        .predictor
        .estimate_trip(
            trip.places_disponibles,
            trip.depart.as_deref(),
            trip.destination.as_deref(),
        )
        .map_err(|e| {
            warn!(seats = trip.places_disponibles, error = %e, "Prediction failed");
            AppError::from(e)
        })?;

    Ok(Json(estimate))
}

/// Liveness is conveyed in the payload; this route itself never errors.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let response = if state.predictor.is_loaded() {
        HealthResponse {
            status: "ok".to_string(),
            message: "The service is up and the model is loaded".to_string(),
        }
    } else {
        HealthResponse {
            status: "error".to_string(),
            message: "The model is not loaded".to_string(),
        }
    };

    Json(response)
}

pub async fn get_config(State(state): State<AppState>) -> Json<Value> {
    if state.config.debug {
        Json(json!(state.config))
    } else {
        Json(json!({
            "message": "Access to the configuration is disabled in production mode"
        }))
    }
}
