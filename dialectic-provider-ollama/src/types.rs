//! Ollama `/api/chat` request/response types.
//!
//! Key differences from the OpenAI Chat Completions API:
//! - Endpoint is POST `/api/chat` (not `/v1/chat/completions`)
//! - No auth headers required
//! - The reply is a single `message` object, not a `choices` array
//! - Generation parameters live under `options`

use serde::{Deserialize, Serialize};

/// Ollama `/api/chat` request body.
#[derive(Debug, Serialize)]
pub struct OllamaRequest {
    /// Model identifier (e.g. "llama3.2").
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<OllamaMessage>,
    /// Whether to stream the response. Always `false` for this provider.
    pub stream: bool,
    /// How long to keep the model loaded in memory (e.g. "5m", "0").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<String>,
    /// Generation options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OllamaOptions>,
}

/// A message in the Ollama `/api/chat` format.
#[derive(Debug, Serialize, Deserialize)]
pub struct OllamaMessage {
    /// Role: "system", "user" or "assistant".
    pub role: String,
    /// Message text content.
    #[serde(default)]
    pub content: String,
}

impl OllamaMessage {
    pub(crate) fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

/// Generation options for Ollama.
#[derive(Debug, Default, Serialize)]
pub struct OllamaOptions {
    /// Sampling temperature (0.0 - 2.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum number of tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

/// Ollama `/api/chat` response body.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct OllamaResponse {
    /// Model that generated the response.
    #[serde(default)]
    pub model: String,
    /// The assistant's response message.
    pub message: OllamaMessage,
    /// Whether the response is complete.
    #[serde(default)]
    pub done: bool,
    /// Why generation stopped (e.g. "stop").
    #[serde(default)]
    pub done_reason: Option<String>,
    /// Number of tokens in the prompt.
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,
    /// Number of tokens generated.
    #[serde(default)]
    pub eval_count: Option<u64>,
}
