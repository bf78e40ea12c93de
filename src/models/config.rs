//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Default ordered list of Gemini model candidates: the fast variant first,
/// the more capable one as fallback.
fn default_llm_models() -> Vec<String> {
    vec!["gemini-1.5-flash".to_string(), "gemini-1.5-pro".to_string()]
}

fn default_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_data_file() -> String {
    "dummyData.json".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
///
/// `gemini_api_key` has no default: deserialization fails when the
/// `GEMINI_API_KEY` environment variable is absent and the process refuses
/// to start.
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path to the JSON file holding the `salesReps` collection.
    #[serde(default = "default_data_file")]
    pub data_file: String,
    pub gemini_api_key: String,
    /// Candidate model ids tried in order when answering AI questions.
    #[serde(default = "default_llm_models")]
    pub llm_models: Vec<String>,
}
