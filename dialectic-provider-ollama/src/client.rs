//! Ollama API client struct and builder.

use std::future::Future;
use std::time::Duration;

use dialectic_types::prompt::DEFAULT_LOCAL_PERSONA;
use dialectic_types::{Message, ProviderError, TurnProvider, TurnRequest};

use crate::error::{map_http_status, map_reqwest_error};
use crate::mapping::{from_api_response, to_api_request};
use crate::types::{OllamaOptions, OllamaResponse};

/// Default model used for every turn.
const DEFAULT_MODEL: &str = "llama3.2";

/// Default Ollama API base URL.
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Local models can be slow to load on first use.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the Ollama Chat API.
///
/// Implements [`TurnProvider`] for the local seat of a debate.
///
/// # Example
///
/// ```no_run
/// use dialectic_provider_ollama::Ollama;
///
/// let client = Ollama::new()
///     .model("llama3.2")
///     .base_url("http://localhost:11434");
/// ```
pub struct Ollama {
    /// Model identifier.
    pub(crate) model: String,
    /// API base URL (override for testing or remote Ollama instances).
    pub(crate) base_url: String,
    /// Persona sent as the system message.
    pub(crate) system_prompt: String,
    /// Optional keep_alive duration string (e.g. "5m", "0" to unload).
    pub(crate) keep_alive: Option<String>,
    pub(crate) temperature: Option<f64>,
    pub(crate) num_predict: Option<u32>,
    pub(crate) timeout: Duration,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl Ollama {
    /// Create a new client with sensible defaults.
    ///
    /// Default model: `llama3.2`.
    /// Default base URL: `http://localhost:11434`.
    /// No authentication required (Ollama is local).
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            base_url: DEFAULT_BASE_URL.into(),
            system_prompt: DEFAULT_LOCAL_PERSONA.into(),
            keep_alive: None,
            temperature: None,
            num_predict: None,
            timeout: DEFAULT_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    /// Override the model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL.
    ///
    /// Useful for testing with a local mock server or a remote Ollama instance.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the persona sent as the system message.
    #[must_use]
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Set the keep_alive duration for model memory residency.
    ///
    /// Examples: `"5m"` (keep for 5 minutes), `"0"` (unload immediately after request).
    /// When not set, Ollama uses its server default.
    #[must_use]
    pub fn keep_alive(mut self, duration: impl Into<String>) -> Self {
        self.keep_alive = Some(duration.into());
        self
    }

    /// Set the sampling temperature.
    #[must_use]
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap the number of generated tokens per turn (`num_predict`).
    #[must_use]
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.num_predict = Some(max_tokens);
        self
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the chat endpoint URL.
    pub(crate) fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    fn options(&self) -> Option<OllamaOptions> {
        if self.temperature.is_none() && self.num_predict.is_none() {
            return None;
        }
        Some(OllamaOptions {
            temperature: self.temperature,
            num_predict: self.num_predict,
        })
    }
}

impl Default for Ollama {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnProvider for Ollama {
    /// Send one turn to the Ollama Chat API with `stream: false`.
    fn take_turn(
        &self,
        request: TurnRequest<'_>,
    ) -> impl Future<Output = Result<Message, ProviderError>> + Send {
        let url = self.chat_url();
        let body = to_api_request(
            &request,
            &self.model,
            &self.system_prompt,
            self.keep_alive.as_deref(),
            self.options(),
        );
        let timeout = self.timeout;
        let http_request = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .timeout(timeout)
            .json(&body);

        async move {
            tracing::debug!(
                url = %url,
                model = %body.model,
                speaker = %request.speaker,
                messages = body.messages.len(),
                "sending turn request to Ollama"
            );

            let response = http_request
                .send()
                .await
                .map_err(|e| map_reqwest_error(e, timeout))?;

            let status = response.status();
            let response_text = response
                .text()
                .await
                .map_err(|e| map_reqwest_error(e, timeout))?;

            if !status.is_success() {
                return Err(map_http_status(status, &response_text));
            }

            let parsed: OllamaResponse = serde_json::from_str(&response_text)
                .map_err(|e| ProviderError::InvalidResponse(format!("invalid JSON response: {e}")))?;

            Ok(from_api_response(parsed, &request))
        }
    }
}
