//! Fare estimation over a pre-trained linear regression model.
//!
//! The model artifact is a JSON file produced by the training pipeline
//! (out of scope here): an intercept plus one coefficient per feature.
//! Seat count is the sole feature. The predictor is read-only after
//! construction and shared by both transport adapters.

use crate::models::PriceEstimate;
use serde::Deserialize;
use service_core::error::AppError;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("The prediction model could not be loaded: {0}")]
    Unavailable(String),

    #[error("Prediction failed: {0}")]
    Estimation(String),
}

impl From<PredictorError> for AppError {
    fn from(err: PredictorError) -> Self {
        AppError::InternalError(anyhow::anyhow!(err))
    }
}

/// Serialized regression artifact: `price = intercept + coefficients · features`.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    fn predict(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

/// The loaded model, or a permanent unavailable state when loading failed.
///
/// A failed load is not fatal: the service still answers health and config
/// requests, and every prediction reports unavailability instead.
pub struct Predictor {
    model: Option<LinearModel>,
    load_error: Option<String>,
}

impl Predictor {
    /// Load the model artifact from `path`. Never fails; the load outcome
    /// is captured in the returned instance.
    pub fn load(path: &Path) -> Self {
        match Self::read_model(path) {
            Ok(model) => {
                info!(path = %path.display(), "Model loaded successfully");
                Self {
                    model: Some(model),
                    load_error: None,
                }
            }
            Err(reason) => {
                error!(path = %path.display(), reason = %reason, "Failed to load model");
                Self {
                    model: None,
                    load_error: Some(reason),
                }
            }
        }
    }

    fn read_model(path: &Path) -> Result<LinearModel, String> {
        let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&raw).map_err(|e| e.to_string())
    }

    #[cfg(test)]
    fn from_model(model: LinearModel) -> Self {
        Self {
            model: Some(model),
            load_error: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Estimate the fare for a trip with `seat_count` available seats,
    /// rounded to 3 decimal places.
    pub fn estimate(&self, seat_count: i32) -> Result<f64, PredictorError> {
        let model = self.model.as_ref().ok_or_else(|| {
            PredictorError::Unavailable(
                self.load_error
                    .clone()
                    .unwrap_or_else(|| "no model loaded".to_string()),
            )
        })?;

        let price = model.predict(&[f64::from(seat_count)]);
        if !price.is_finite() {
            return Err(PredictorError::Estimation(format!(
                "model produced a non-finite price for {} seats",
                seat_count
            )));
        }

        Ok(round3(price))
    }

    /// The shared estimation-and-formatting path used by both adapters.
    /// The route clause is only included when both places are non-empty.
    pub fn estimate_trip(
        &self,
        seat_count: i32,
        depart: Option<&str>,
        destination: Option<&str>,
    ) -> Result<PriceEstimate, PredictorError> {
        let price = self.estimate(seat_count)?;

        let route = match (depart, destination) {
            (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => {
                format!(" from {} to {}", from, to)
            }
            _ => String::new(),
        };

        Ok(PriceEstimate {
            prix_estime: price,
            message: format!(
                "The estimated price for a trip{} with {} available seats is {} dinars.",
                route, seat_count, price
            ),
        })
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
