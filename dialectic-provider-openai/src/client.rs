//! OpenAI API client struct and builder.

use std::future::Future;
use std::time::Duration;

use dialectic_types::prompt::DEFAULT_HOSTED_PERSONA;
use dialectic_types::{Message, ProviderError, TurnProvider, TurnRequest};

use crate::error::{map_http_status, map_reqwest_error};
use crate::mapping::{Sampling, from_api_response, to_api_request};
use crate::types::OpenAIResponse;

/// Default model used for every turn.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI API base URL.
const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the OpenAI Chat Completions API.
///
/// Implements [`TurnProvider`]: each turn is one system message (the persona)
/// plus one user message holding either the opening prompt or the flattened
/// transcript.
///
/// # Example
///
/// ```no_run
/// use dialectic_provider_openai::OpenAi;
///
/// let client = OpenAi::new("sk-...")
///     .model("gpt-4o-mini")
///     .base_url("https://api.openai.com")
///     .temperature(0.8);
/// ```
pub struct OpenAi {
    /// OpenAI API key.
    pub(crate) api_key: String,
    /// Model identifier.
    pub(crate) model: String,
    /// API base URL (override for testing, proxies, or compatible services).
    pub(crate) base_url: String,
    /// Persona sent as the system message.
    pub(crate) system_prompt: String,
    /// Optional organization ID for multi-org accounts.
    pub(crate) organization: Option<String>,
    pub(crate) temperature: Option<f64>,
    pub(crate) max_tokens: Option<u32>,
    pub(crate) timeout: Duration,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl OpenAi {
    /// Create a new client with the given API key and sensible defaults.
    ///
    /// Default model: `gpt-4o-mini`.
    /// Default base URL: `https://api.openai.com`.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            base_url: DEFAULT_BASE_URL.into(),
            system_prompt: DEFAULT_HOSTED_PERSONA.into(),
            organization: None,
            temperature: None,
            max_tokens: None,
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
    /// Useful for testing with a local mock server or an API proxy.
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

    /// Set the OpenAI organization ID.
    ///
    /// Sent as the `OpenAI-Organization` header on every request.
    #[must_use]
    pub fn organization(mut self, org: impl Into<String>) -> Self {
        self.organization = Some(org.into());
        self
    }

    /// Set the sampling temperature.
    #[must_use]
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap the number of generated tokens per turn.
    #[must_use]
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the chat completions endpoint URL.
    pub(crate) fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn sampling(&self) -> Sampling {
        Sampling {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

impl TurnProvider for OpenAi {
    /// Send one turn to the Chat Completions API and return the reply.
    fn take_turn(
        &self,
        request: TurnRequest<'_>,
    ) -> impl Future<Output = Result<Message, ProviderError>> + Send {
        let url = self.completions_url();
        let body = to_api_request(&request, &self.model, &self.system_prompt, self.sampling());
        let timeout = self.timeout;

        let mut http_request = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .timeout(timeout)
            .json(&body);
        if let Some(org) = &self.organization {
            http_request = http_request.header("OpenAI-Organization", org);
        }

        async move {
            tracing::debug!(
                url = %url,
                model = %body.model,
                speaker = %request.speaker,
                history_len = request.history.len(),
                "sending turn request to OpenAI"
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

            let parsed: OpenAIResponse = serde_json::from_str(&response_text)
                .map_err(|e| ProviderError::InvalidResponse(format!("invalid JSON response: {e}")))?;

            from_api_response(parsed, &request)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_set() {
        let client = OpenAi::new("test-key");
        assert_eq!(client.model, DEFAULT_MODEL);
    }

    #[test]
    fn default_base_url_is_set() {
        let client = OpenAi::new("test-key");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn default_persona_is_hosted_persona() {
        let client = OpenAi::new("test-key");
        assert_eq!(client.system_prompt, DEFAULT_HOSTED_PERSONA);
    }

    #[test]
    fn builder_overrides_model() {
        let client = OpenAi::new("test-key").model("gpt-4o");
        assert_eq!(client.model, "gpt-4o");
    }

    #[test]
    fn builder_overrides_base_url_and_strips_slash() {
        let client = OpenAi::new("test-key").base_url("http://localhost:9999/");
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn builder_sets_sampling() {
        let client = OpenAi::new("test-key").temperature(0.3).max_tokens(128);
        assert_eq!(client.temperature, Some(0.3));
        assert_eq!(client.max_tokens, Some(128));
    }

    #[test]
    fn organization_default_is_none() {
        let client = OpenAi::new("test-key");
        assert!(client.organization.is_none());
        let client = client.organization("org-abc123");
        assert_eq!(client.organization, Some("org-abc123".to_string()));
    }

    #[test]
    fn completions_url_includes_path() {
        let client = OpenAi::new("test-key").base_url("http://localhost:9999");
        assert_eq!(
            client.completions_url(),
            "http://localhost:9999/v1/chat/completions"
        );
    }
}
