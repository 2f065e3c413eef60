//! pricing-service: fare estimation for ride-share trips.
//!
//! One pre-trained regression model, loaded once at startup, served over
//! two transports: a JSON HTTP API and a gRPC endpoint with identical
//! prediction semantics.

pub mod config;
pub mod grpc;
pub mod handlers;
pub mod models;
pub mod predictor;
pub mod startup;
