//! Wire types for the HTTP API. Field names keep the platform's original
//! JSON contract (`placesDisponibles`, `prixEstime`).

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One ride-share trip offer, constructed per request and never persisted.
#[derive(Debug, Deserialize, Validate)]
pub struct TripRequest {
    #[serde(rename = "placesDisponibles")]
    #[validate(range(min = 1, max = 6, message = "placesDisponibles must be between 1 and 6"))]
    pub places_disponibles: i32,

    pub depart: Option<String>,
    pub destination: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    #[serde(rename = "prixEstime")]
    pub prix_estime: f64,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
