//! Shared test harness: spawns the application on random ports with a
//! model fixture written to a temp file.
#![allow(dead_code)]

use pricing_service::config::PricingConfig;
use pricing_service::startup::Application;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

pub const TEST_INTERCEPT: f64 = 10.0;
pub const TEST_COEFFICIENT: f64 = 2.5;

/// Expected estimate for the default fixture model.
pub fn expected_price(seats: i32) -> f64 {
    TEST_INTERCEPT + TEST_COEFFICIENT * f64::from(seats)
}

pub fn write_model(intercept: f64, coefficient: f64) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create model file");
    write!(
        file,
        r#"{{"intercept": {}, "coefficients": [{}]}}"#,
        intercept, coefficient
    )
    .expect("Failed to write model file");
    file.flush().expect("Failed to flush model file");
    file
}

pub struct TestApp {
    pub http_port: u16,
    pub grpc_port: u16,
    _model_file: Option<NamedTempFile>,
}

impl TestApp {
    /// Spawn with the default fixture model.
    pub async fn spawn() -> Self {
        Self::spawn_configured(Some(write_model(TEST_INTERCEPT, TEST_COEFFICIENT)), false).await
    }

    /// Spawn with a model path that does not exist, leaving the predictor
    /// permanently unavailable.
    pub async fn spawn_without_model() -> Self {
        Self::spawn_configured(None, false).await
    }

    pub async fn spawn_with_model(model_file: NamedTempFile) -> Self {
        Self::spawn_configured(Some(model_file), false).await
    }

    pub async fn spawn_with_debug() -> Self {
        Self::spawn_configured(Some(write_model(TEST_INTERCEPT, TEST_COEFFICIENT)), true).await
    }

    async fn spawn_configured(model_file: Option<NamedTempFile>, debug: bool) -> Self {
        let model_path = model_file
            .as_ref()
            .map(|f| f.path().display().to_string())
            .unwrap_or_else(|| "/nonexistent/price_estimator_model.json".to_string());

        let config = PricingConfig {
            host: "127.0.0.1".to_string(),
            api_port: 0,
            grpc_port: 0,
            model_path,
            debug,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build application");
        let http_port = app.http_port();
        let grpc_port = app.grpc_port();

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        // Wait for the servers to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        TestApp {
            http_port,
            grpc_port,
            _model_file: model_file,
        }
    }

    pub fn http_url(&self, path: &str) -> String {
        format!("http://localhost:{}{}", self.http_port, path)
    }
}
