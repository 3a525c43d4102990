//! Integration tests for the catalog page handlers.

use heritage_service::config::{GroqSettings, HeritageConfig, ServerConfig, WikiConfig};
use heritage_service::services::providers::mock::MockTextProvider;
use heritage_service::services::providers::TextProvider;
use heritage_service::startup::Application;
use reqwest::Client;
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
            // Never contacted by these tests.
            api_base: "http://127.0.0.1:1".to_string(),
        },
        wiki: WikiConfig {
            api_base: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
        },
        maps_api_key: Some("test-maps-key".to_string()),
    }
}

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    let provider: Arc<dyn TextProvider> = Arc::new(MockTextProvider::replying("unused"));
    let app = Application::build_with_provider(test_config(), provider)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

#[tokio::test]
async fn home_page_renders() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Indian Heritage Explorer"));
    assert!(body.contains("/category/places"));
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "heritage-service");
}

#[tokio::test]
async fn category_page_lists_items_in_order() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/category/places", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Taj Mahal"));
    assert!(body.contains("Mysore Palace"));

    // Declaration order: Taj Mahal is listed before Sanchi Stupa.
    let taj = body.find("Taj Mahal").unwrap();
    let sanchi = body.find("Sanchi Stupa").unwrap();
    assert!(taj < sanchi);
}

#[tokio::test]
async fn unknown_category_returns_400() {
    let port = spawn_app().await;
    let client = Client::new();

    for cat in ["monuments", "Places", "PLACES", "foo"] {
        let response = client
            .get(format!("http://localhost:{}/category/{}", port, cat))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status().as_u16(), 400, "category {}", cat);
        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body["error"], "Invalid category");
    }
}

#[tokio::test]
async fn detail_with_unknown_category_returns_400() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/detail/monuments/taj-mahal", port))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Invalid category");
}

#[tokio::test]
async fn detail_with_unknown_key_returns_404() {
    let port = spawn_app().await;
    let client = Client::new();

    for path in ["places/atlantis", "arts/flamenco", "festivals/carnival"] {
        let response = client
            .get(format!("http://localhost:{}/detail/{}", port, path))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status().as_u16(), 404, "path {}", path);
        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body["error"], "Item not found");
    }
}

#[tokio::test]
async fn detail_page_renders_with_map_for_places() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/detail/places/taj-mahal", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Taj Mahal"));
    // Map-provider key is passed through to the page.
    assert!(body.contains("test-maps-key"));
}

#[tokio::test]
async fn detail_page_omits_map_for_non_places() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/detail/arts/kathakali", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Kathakali"));
    assert!(!body.contains("maps/embed"));
}
