//! Root, health, and config endpoint tests.
//!
//! Run with: cargo test -p pricing-service --test health_check

mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::Value;

#[tokio::test]
async fn root_returns_welcome_message() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(app.http_url("/"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["message"].as_str().unwrap().contains("price prediction"));
}

#[tokio::test]
async fn health_reports_ok_when_model_loaded() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(app.http_url("/health/"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn health_reports_error_when_model_missing() {
    let app = TestApp::spawn_without_model().await;
    let client = Client::new();

    let response = client
        .get(app.http_url("/health/"))
        .send()
        .await
        .expect("Failed to send request");

    // Health itself never errors; the status field carries the state.
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn config_returns_full_configuration_in_debug_mode() {
    let app = TestApp::spawn_with_debug().await;
    let client = Client::new();

    let response = client
        .get(app.http_url("/config/"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["api_host"], "127.0.0.1");
    assert_eq!(body["debug"], true);
    assert!(body["model_path"].is_string());
    assert!(body["grpc_port"].is_number());
}

#[tokio::test]
async fn config_access_is_disabled_outside_debug_mode() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(app.http_url("/config/"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["message"],
        "Access to the configuration is disabled in production mode"
    );
    assert!(body.get("model_path").is_none());
}
