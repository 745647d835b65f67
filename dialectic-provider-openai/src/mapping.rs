//! Request/response mapping between dialectic turns and the OpenAI Chat
//! Completions API format.
//!
//! Reference: <https://platform.openai.com/docs/api-reference/chat>

use dialectic_types::prompt::{finalize_reply, user_prompt};
use dialectic_types::{Message, ProviderError, TurnRequest};

use crate::types::{OpenAIMessage, OpenAIRequest, OpenAIResponse};

/// Generation settings carried from the client into each request.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Sampling {
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

// ─── Request mapping ─────────────────────────────────────────────────────────

/// Build the request body for one turn.
///
/// The whole debate is flattened into a single user message; the persona is
/// the system message.
pub(crate) fn to_api_request(
    turn: &TurnRequest<'_>,
    model: &str,
    system: &str,
    sampling: Sampling,
) -> OpenAIRequest {
    OpenAIRequest {
        model: model.to_string(),
        messages: vec![
            OpenAIMessage::new("system", system),
            OpenAIMessage::new("user", user_prompt(turn)),
        ],
        max_tokens: sampling.max_tokens,
        temperature: sampling.temperature,
    }
}

// ─── Response mapping ─────────────────────────────────────────────────────────

/// Extract the reply from the first choice and tag it with the turn's speaker.
///
/// # Errors
///
/// Returns [`ProviderError::InvalidResponse`] when the response has no choices.
pub(crate) fn from_api_response(
    response: OpenAIResponse,
    turn: &TurnRequest<'_>,
) -> Result<Message, ProviderError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::InvalidResponse("response has no choices".into()))?;
    tracing::debug!(
        id = %response.id,
        model = %response.model,
        finish_reason = choice.finish_reason.as_deref().unwrap_or("unknown"),
        "received completion"
    );
    let text = choice.message.content.unwrap_or_default();
    Ok(Message::new(turn.speaker, finalize_reply(&text)))
}
