//! Application startup and lifecycle management.
//!
//! Builds the shared predictor once, binds both listeners up front (port 0
//! is supported for tests), then drives the HTTP and gRPC servers
//! concurrently until a shutdown signal arrives.

use crate::config::PricingConfig;
use crate::grpc::{
    proto::{prediction_service_server::PredictionServiceServer, FILE_DESCRIPTOR_SET},
    PredictionGrpcService,
};
use crate::handlers;
use crate::predictor::Predictor;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tonic::transport::Server as GrpcServer;
use tower_http::trace::TraceLayer;

/// Bounded concurrent gRPC calls, matching the historical worker pool size.
const GRPC_CONCURRENCY_LIMIT: usize = 10;

/// Shared application state. The predictor is read-only after load; no
/// locking is needed because no writer exists post-startup.
#[derive(Clone)]
pub struct AppState {
    pub config: PricingConfig,
    pub predictor: Arc<Predictor>,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    http_port: u16,
    grpc_port: u16,
    http_listener: TcpListener,
    grpc_listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// A missing or corrupt model artifact is not fatal: the predictor is
    /// constructed unavailable and health/predict report it. Only a
    /// listener bind failure aborts startup.
    pub async fn build(config: PricingConfig) -> Result<Self, AppError> {
        let predictor = Arc::new(Predictor::load(Path::new(&config.model_path)));

        let http_listener = TcpListener::bind((config.host.as_str(), config.api_port))
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to bind HTTP listener to {}:{}: {}",
                    config.host,
                    config.api_port,
                    e
                );
                AppError::from(e)
            })?;
        let http_port = http_listener.local_addr()?.port();

        let grpc_listener = TcpListener::bind((config.host.as_str(), config.grpc_port))
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to bind gRPC listener to {}:{}: {}",
                    config.host,
                    config.grpc_port,
                    e
                );
                AppError::from(e)
            })?;
        let grpc_port = grpc_listener.local_addr()?.port();

        tracing::info!(
            "Pricing service: HTTP on port {}, gRPC on port {}",
            http_port,
            grpc_port
        );

        let state = AppState { config, predictor };

        Ok(Self {
            http_port,
            grpc_port,
            http_listener,
            grpc_listener,
            state,
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    /// Get the gRPC port the server is listening on.
    pub fn grpc_port(&self) -> u16 {
        self.grpc_port
    }

    /// Run the application until stopped.
    ///
    /// This starts both the HTTP server and the gRPC server concurrently,
    /// each independently lifetimed under the same shutdown signal.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = Router::new()
            .route("/", get(handlers::root))
            .route("/predict/", post(handlers::predict))
            .route("/health/", get(handlers::health))
            .route("/config/", get(handlers::get_config))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone());

        let prediction_service = PredictionGrpcService::new(self.state.predictor.clone());

        // gRPC health service
        let (mut health_reporter, grpc_health_service) = tonic_health::server::health_reporter();
        health_reporter
            .set_serving::<PredictionServiceServer<PredictionGrpcService>>()
            .await;

        // Reflection service for debugging
        let reflection_service = tonic_reflection::server::Builder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()
            .map_err(|e| {
                std::io::Error::other(format!("Failed to build reflection service: {}", e))
            })?;

        let incoming = tokio_stream::wrappers::TcpListenerStream::new(self.grpc_listener);
        let grpc_server = GrpcServer::builder()
            .concurrency_limit_per_connection(GRPC_CONCURRENCY_LIMIT)
            .add_service(grpc_health_service)
            .add_service(reflection_service)
            .add_service(PredictionServiceServer::new(prediction_service))
            .serve_with_incoming_shutdown(incoming, shutdown_signal());

        let http_server =
            axum::serve(self.http_listener, router).with_graceful_shutdown(shutdown_signal());

        // Run both servers concurrently
        tokio::select! {
            result = http_server => {
                if let Err(e) = result {
                    tracing::error!("HTTP server error: {}", e);
                    return Err(std::io::Error::other(format!("HTTP server error: {}", e)));
                }
            }
            result = grpc_server => {
                if let Err(e) = result {
                    tracing::error!("gRPC server error: {}", e);
                    return Err(std::io::Error::other(format!("gRPC server error: {}", e)));
                }
            }
        }

        Ok(())
    }
}
