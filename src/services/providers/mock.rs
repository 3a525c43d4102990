//! Mock provider implementation for testing.

use super::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;

/// What the mock should do when asked to generate.
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Return this text as the completion.
    Reply(String),
    /// Fail as if the upstream call timed out.
    Timeout,
    /// Fail as if the upstream host was unreachable.
    ConnectionRefused,
    /// Fail with a generic API error.
    ApiFailure,
}

/// Mock text provider for tests.
pub struct MockTextProvider {
    mode: MockMode,
}

impl MockTextProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            mode: MockMode::Reply(text.into()),
        }
    }

    pub fn with_mode(mode: MockMode) -> Self {
        Self { mode }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        match &self.mode {
            MockMode::Reply(text) => Ok(ProviderResponse { text: text.clone() }),
            MockMode::Timeout => Err(ProviderError::Timeout),
            MockMode::ConnectionRefused => {
                Err(ProviderError::Connection("connection refused".to_string()))
            }
            MockMode::ApiFailure => Err(ProviderError::Api("mock api failure".to_string())),
        }
    }
}
