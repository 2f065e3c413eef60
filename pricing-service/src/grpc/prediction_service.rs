//! PredictionService gRPC implementation.

use crate::grpc::proto::{
    prediction_service_server::PredictionService, PricePredictionRequest, PricePredictionResponse,
};
use crate::predictor::Predictor;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::warn;

/// Callers of this service (the trip service in particular) expect every
/// outcome in the response payload: the method never returns a non-OK
/// status for prediction failures.
pub struct PredictionGrpcService {
    predictor: Arc<Predictor>,
}

impl PredictionGrpcService {
    pub fn new(predictor: Arc<Predictor>) -> Self {
        Self { predictor }
    }
}

/// Proto3 strings have no absence; empty means not provided.
fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[tonic::async_trait]
impl PredictionService for PredictionGrpcService {
    async fn predict_price(
        &self,
        request: Request<PricePredictionRequest>,
    ) -> Result<Response<PricePredictionResponse>, Status> {
        let req = request.into_inner();

        // No seat-count bound check here: the HTTP boundary validates,
        // this internal surface keeps the historical contract as-is.
        let response = match self.predictor.estimate_trip(
            req.places_disponibles,
            non_empty(&req.depart),
            non_empty(&req.destination),
        ) {
            Ok(estimate) => PricePredictionResponse {
                success: true,
                message: estimate.message,
                prix_estime: estimate.prix_estime,
            },
            Err(e) => {
                warn!(seats = req.places_disponibles, error = %e, "Prediction failed");
                PricePredictionResponse {
                    success: false,
                    message: e.to_string(),
                    prix_estime: 0.0,
                }
            }
        };

        Ok(Response::new(response))
    }
}
