pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;

use config::HeritageConfig;
use services::providers::TextProvider;
use services::wiki::WikiImageFetcher;
use std::sync::Arc;

/// Shared application state handed to every request handler.
///
/// Everything in here is immutable after startup, so it needs no
/// synchronization beyond the `Arc` clones.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HeritageConfig>,
    pub text_provider: Arc<dyn TextProvider>,
    pub wiki: Arc<WikiImageFetcher>,
}

impl AppState {
    pub fn new(
        config: Arc<HeritageConfig>,
        text_provider: Arc<dyn TextProvider>,
        wiki: Arc<WikiImageFetcher>,
    ) -> Self {
        Self {
            config,
            text_provider,
            wiki,
        }
    }
}
