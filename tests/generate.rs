//! Integration tests for the article generation endpoint.

use heritage_service::config::{GroqSettings, HeritageConfig, ServerConfig, WikiConfig};
use heritage_service::services::providers::mock::{MockMode, MockTextProvider};
use heritage_service::services::providers::TextProvider;
use heritage_service::startup::Application;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;

fn test_config() -> HeritageConfig {
    HeritageConfig {
        server: ServerConfig {
            port: 0,
            debug: false,
        },
        groq: GroqSettings {
            api_key: "test-key".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            // Never contacted: the tests inject a mock provider.
            api_base: "http://127.0.0.1:1".to_string(),
        },
        wiki: WikiConfig {
            api_base: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
        },
        maps_api_key: None,
    }
}

/// Spawn the application with the given provider, returning the port.
async fn spawn_app(provider: MockTextProvider) -> u16 {
    let provider: Arc<dyn TextProvider> = Arc::new(provider);
    let app = Application::build_with_provider(test_config(), provider)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

async fn post_generate(port: u16, body: serde_json::Value) -> reqwest::Response {
    Client::new()
        .post(format!("http://localhost:{}/generate", port))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request")
}

async fn assert_error(response: reqwest::Response, status: u16, message: &str) {
    assert_eq!(response.status().as_u16(), status);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], message);
}

#[tokio::test]
async fn empty_body_returns_400() {
    let port = spawn_app(MockTextProvider::replying("unused")).await;

    let response = Client::new()
        .post(format!("http://localhost:{}/generate", port))
        .send()
        .await
        .expect("Failed to send request");

    assert_error(response, 400, "Request body cannot be empty").await;
}

#[tokio::test]
async fn fieldless_object_body_returns_400() {
    let port = spawn_app(MockTextProvider::replying("unused")).await;
    let response = post_generate(port, json!({})).await;
    assert_error(response, 400, "Request body cannot be empty").await;
}

#[tokio::test]
async fn missing_name_returns_400() {
    let port = spawn_app(MockTextProvider::replying("unused")).await;
    let response = post_generate(port, json!({ "category": "places" })).await;
    assert_error(response, 400, "Name is required").await;
}

#[tokio::test]
async fn whitespace_name_returns_400() {
    let port = spawn_app(MockTextProvider::replying("unused")).await;
    let response =
        post_generate(port, json!({ "name": "   ", "category": "places" })).await;
    assert_error(response, 400, "Name is required").await;
}

#[tokio::test]
async fn missing_category_returns_400() {
    let port = spawn_app(MockTextProvider::replying("unused")).await;
    let response = post_generate(port, json!({ "name": "Taj Mahal" })).await;
    assert_error(response, 400, "Category is required").await;
}

#[tokio::test]
async fn invalid_category_returns_400() {
    let port = spawn_app(MockTextProvider::replying("unused")).await;
    let response =
        post_generate(port, json!({ "name": "Taj Mahal", "category": "invalid" })).await;
    assert_error(response, 400, "Invalid category").await;
}

#[tokio::test]
async fn invalid_language_returns_400() {
    let port = spawn_app(MockTextProvider::replying("unused")).await;
    let response = post_generate(
        port,
        json!({ "name": "Taj Mahal", "category": "places", "language": "French" }),
    )
    .await;
    assert_error(response, 400, "Invalid language").await;
}

#[tokio::test]
async fn successful_generation_returns_cleaned_text() {
    let raw = "**Taj Mahal** is a # Monument\n- built in 1653\n\n\n\nLocated in Agra";
    let port = spawn_app(MockTextProvider::replying(raw)).await;

    let response = post_generate(
        port,
        json!({ "name": "Taj Mahal", "category": "places", "language": "English" }),
    )
    .await;

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["text"],
        "Taj Mahal is a Monument\nbuilt in 1653\n\nLocated in Agra"
    );
}

#[tokio::test]
async fn language_defaults_to_english() {
    let port = spawn_app(MockTextProvider::replying("An article.")).await;

    let response =
        post_generate(port, json!({ "name": "Taj Mahal", "category": "places" })).await;

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["text"], "An article.");
}

#[tokio::test]
async fn upstream_timeout_returns_504() {
    let port = spawn_app(MockTextProvider::with_mode(MockMode::Timeout)).await;

    let response = post_generate(
        port,
        json!({ "name": "Taj Mahal", "category": "places" }),
    )
    .await;

    assert_error(response, 504, "Request timeout. Please try again.").await;
}

#[tokio::test]
async fn upstream_connection_failure_returns_503() {
    let port = spawn_app(MockTextProvider::with_mode(MockMode::ConnectionRefused)).await;

    let response = post_generate(
        port,
        json!({ "name": "Taj Mahal", "category": "places" }),
    )
    .await;

    assert_error(response, 503, "Connection error. Please check your internet.").await;
}

#[tokio::test]
async fn other_upstream_failure_returns_500() {
    let port = spawn_app(MockTextProvider::with_mode(MockMode::ApiFailure)).await;

    let response = post_generate(
        port,
        json!({ "name": "Taj Mahal", "category": "places" }),
    )
    .await;

    assert_error(response, 500, "Failed to generate content. Please try again.").await;
}
