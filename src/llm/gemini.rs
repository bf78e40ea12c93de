//! Google Gemini API client.
//!
//! Auth is performed via the `?key=API_KEY` query parameter. Model fallback
//! is driven by an explicit ordered candidate list: each candidate is probed
//! with a metadata request and the first one the service acknowledges is
//! used for the completion call.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;

use crate::llm::{LlmError, LlmGateway};

/// The default Google Gemini API base URL.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    models: Vec<String>,
}

impl GeminiClient {
    /// Create a new client with the given API key and ordered model
    /// candidate list.
    pub fn new(api_key: impl Into<String>, models: Vec<String>) -> Result<Self, LlmError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| LlmError::Request(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            models,
        })
    }

    /// Override the API base URL, e.g. to point at a proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}?key={}", self.base_url, model, self.api_key)
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        )
    }

    /// Extract the reply text from a `generateContent` response, joining
    /// multiple text parts when present.
    fn parse_reply(body: &Value) -> Result<String, LlmError> {
        let candidates = body["candidates"]
            .as_array()
            .ok_or_else(|| LlmError::ResponseParse("Missing 'candidates' array".to_string()))?;

        let candidate = candidates
            .first()
            .ok_or_else(|| LlmError::ResponseParse("Empty 'candidates' array".to_string()))?;

        let parts = candidate["content"]["parts"].as_array().ok_or_else(|| {
            LlmError::ResponseParse("Missing 'parts' array in candidate content".to_string())
        })?;

        let text = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}

#[async_trait]
impl LlmGateway for GeminiClient {
    async fn resolve_model(&self) -> Result<String, LlmError> {
        for model in &self.models {
            match self.http.get(self.model_url(model)).send().await {
                Ok(response) if response.status().is_success() => {
                    debug!("Using {model} model");
                    return Ok(model.clone());
                }
                Ok(response) => {
                    warn!("Model {model} not available: HTTP {}", response.status());
                }
                Err(e) => {
                    warn!("Model {model} not available: {e}");
                }
            }
        }

        Err(LlmError::ModelUnavailable(self.models.join(", ")))
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}],
            }],
        });

        debug!("Sending Gemini completion request to {model}");

        let response = self
            .http
            .post(self.generate_url(model))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Request(format!("Request to Gemini API failed: {e}")))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| LlmError::ResponseParse(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(LlmError::Request(format!(
                "HTTP {status} from Gemini API: {body_text}"
            )));
        }

        let response_json: Value = serde_json::from_str(&body_text)
            .map_err(|e| LlmError::ResponseParse(format!("Invalid JSON in response: {e}")))?;

        Self::parse_reply(&response_json)
    }
}
