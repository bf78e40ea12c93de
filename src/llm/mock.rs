//! Mock gateway for isolating the AI service in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::llm::{LlmError, LlmGateway};

mock! {
    pub Gateway {}

    #[async_trait]
    impl LlmGateway for Gateway {
        async fn resolve_model(&self) -> Result<String, LlmError>;
        async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
    }
}
