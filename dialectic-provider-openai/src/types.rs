//! OpenAI Chat Completions API request/response types.
//!
//! Only the fields a debate turn needs are modelled; unknown response fields
//! are ignored.

use serde::{Deserialize, Serialize};

/// OpenAI Chat Completions API request body.
#[derive(Debug, Serialize)]
pub struct OpenAIRequest {
    /// Model identifier (e.g. "gpt-4o-mini").
    pub model: String,
    /// Conversation messages: one system message and one user message.
    pub messages: Vec<OpenAIMessage>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// A message in the OpenAI Chat Completions API format.
#[derive(Debug, Serialize, Deserialize)]
pub struct OpenAIMessage {
    /// Role: "system", "user" or "assistant".
    pub role: String,
    /// Message text. `null` in some assistant replies.
    #[serde(default)]
    pub content: Option<String>,
}

impl OpenAIMessage {
    pub(crate) fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.into()),
        }
    }
}

/// OpenAI Chat Completions API response body.
#[derive(Debug, Deserialize)]
pub struct OpenAIResponse {
    /// Unique identifier for the completion.
    #[serde(default)]
    pub id: String,
    /// Model that generated the response.
    #[serde(default)]
    pub model: String,
    /// Response choices.
    pub choices: Vec<OpenAIChoice>,
}

/// A single choice in the response.
#[derive(Debug, Deserialize)]
pub struct OpenAIChoice {
    /// The generated message.
    pub message: OpenAIMessage,
    /// Why generation stopped.
    #[serde(default)]
    pub finish_reason: Option<String>,
}
