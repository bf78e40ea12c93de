//! Gateway to the external Gemini model service.

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    /// No candidate model could be initialized.
    #[error("No usable model among: {0}")]
    ModelUnavailable(String),

    /// The completion request itself failed.
    #[error("Model request failed: {0}")]
    Request(String),

    /// The service answered with a payload we could not interpret.
    #[error("Unexpected model response: {0}")]
    ResponseParse(String),
}

/// Stateless access to a chat model service.
///
/// Each call is a single request/response exchange; no conversation history
/// is retained across requests.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Picks the first usable model from the configured candidate list.
    ///
    /// Returns [`LlmError::ModelUnavailable`] once the list is exhausted.
    async fn resolve_model(&self) -> Result<String, LlmError>;

    /// Sends a single-turn prompt to `model` and returns the reply text.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
}
