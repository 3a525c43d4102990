//! Application startup and router assembly.

use crate::config::HeritageConfig;
use crate::error::AppError;
use crate::handlers::{generate, pages, wiki_images};
use crate::services::providers::groq::{GroqConfig, GroqTextProvider};
use crate::services::providers::TextProvider;
use crate::services::wiki::WikiImageFetcher;
use crate::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Liveness probe.
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "heritage-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/health", get(health_check))
        .route("/category/:cat", get(pages::category))
        .route("/detail/:cat/:key", get(pages::detail))
        .route("/generate", post(generate::generate))
        .route("/wiki_images", get(wiki_images::wiki_images))
        .nest_service("/static", ServeDir::new("static"))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the real Groq text provider.
    pub async fn build(config: HeritageConfig) -> Result<Self, AppError> {
        let groq_config = GroqConfig {
            api_key: config.groq.api_key.clone(),
            model: config.groq.model.clone(),
            api_base: config.groq.api_base.clone(),
        };
        let text_provider: Arc<dyn TextProvider> = Arc::new(GroqTextProvider::new(groq_config));

        tracing::info!(model = %config.groq.model, "Initialized Groq text provider");

        Self::build_with_provider(config, text_provider).await
    }

    /// Build with an injected text provider. Used by tests to avoid
    /// outbound LLM calls.
    pub async fn build_with_provider(
        config: HeritageConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let wiki = WikiImageFetcher::new(
            &config.wiki.api_base,
            Duration::from_secs(config.wiki.timeout_secs),
        );
        tracing::info!(endpoint = %config.wiki.api_base, "Initialized Wikipedia image fetcher");

        let state = AppState::new(Arc::new(config), text_provider, Arc::new(wiki));

        // Port 0 binds an ephemeral port for tests.
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Heritage service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// The port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve requests until the process is stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}
