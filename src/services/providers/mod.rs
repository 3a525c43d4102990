//! Text-generation provider abstraction.
//!
//! A trait-based seam in front of the external chat-completions API,
//! allowing the real Groq backend to be swapped for a mock in tests.

pub mod groq;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Completion contained no text")]
    EmptyCompletion,
}

/// Generation parameters for a single request.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1500,
        }
    }
}

/// Result of a provider call: the first completion's text.
#[derive(Debug)]
pub struct ProviderResponse {
    pub text: String,
}

/// Trait for text generation providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;
}
