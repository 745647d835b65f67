//! Request/response mapping between dialectic turns and the Ollama Chat API
//! format.
//!
//! Reference: <https://github.com/ollama/ollama/blob/main/docs/api.md#generate-a-chat-completion>

use dialectic_types::prompt::{finalize_reply, opening_prompt, transcript_line, turn_instruction};
use dialectic_types::{Message, TurnRequest};

use crate::types::{OllamaMessage, OllamaOptions, OllamaRequest, OllamaResponse};

// ─── Request mapping ─────────────────────────────────────────────────────────

/// Build the request body for one turn.
///
/// Message layout: the system persona, then one `user` message per history
/// entry (`LABEL: content`), then the turn instruction. Both seats share the
/// `user` role so the model reads the history as a transcript rather than as
/// its own earlier replies. An empty history is replaced by the opening prompt.
pub(crate) fn to_api_request(
    turn: &TurnRequest<'_>,
    model: &str,
    system: &str,
    keep_alive: Option<&str>,
    options: Option<OllamaOptions>,
) -> OllamaRequest {
    let mut messages = Vec::with_capacity(turn.history.len() + 2);
    messages.push(OllamaMessage::new("system", system));

    if turn.is_opening() {
        messages.push(OllamaMessage::new(
            "user",
            opening_prompt(turn.topic, turn.speaker_name()),
        ));
    } else {
        messages.extend(
            turn.history
                .iter()
                .map(|m| OllamaMessage::new("user", transcript_line(m, turn.roster))),
        );
        messages.push(OllamaMessage::new(
            "user",
            turn_instruction(turn.speaker_name()),
        ));
    }

    OllamaRequest {
        model: model.to_string(),
        messages,
        stream: false,
        keep_alive: keep_alive.map(str::to_string),
        options,
    }
}

// ─── Response mapping ─────────────────────────────────────────────────────────

/// Extract the reply from `message.content` and tag it with the turn's speaker.
pub(crate) fn from_api_response(response: OllamaResponse, turn: &TurnRequest<'_>) -> Message {
    Message::new(turn.speaker, finalize_reply(&response.message.content))
}
