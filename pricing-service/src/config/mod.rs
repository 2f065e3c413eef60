use serde::Serialize;
use service_core::error::AppError;
use std::env;

/// Service configuration, read once from the environment at startup and
/// immutable afterwards.
///
/// Serialized field names match the `/config/` debug endpoint contract.
#[derive(Debug, Clone, Serialize)]
pub struct PricingConfig {
    #[serde(rename = "api_host")]
    pub host: String,
    pub api_port: u16,
    pub grpc_port: u16,
    pub model_path: String,
    pub debug: bool,
}

impl PricingConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(PricingConfig {
            host: get_env("HOST", "0.0.0.0"),
            api_port: parse_env("API_PORT", 8000)?,
            grpc_port: parse_env("GRPC_PORT", 50053)?,
            model_path: get_env("MODEL_PATH", "price_estimator_model.json"),
            debug: get_env("DEBUG", "false").eq_ignore_ascii_case("true"),
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env(key: &str, default: u16) -> Result<u16, AppError> {
    match env::var(key) {
        Ok(val) => val.parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} is not a valid port number: {}", key, e))
        }),
        Err(_) => Ok(default),
    }
}
