//! Prompt building shared by both providers.
//!
//! Both backends follow the same opening policy: with an empty history the
//! single user message is [`opening_prompt`]; otherwise the history is
//! rendered as `LABEL: content` lines and the model is told it is its turn.

use crate::types::{Message, Roster, TurnRequest};

/// Text substituted when a model returns an empty reply.
pub const EMPTY_REPLY_PLACEHOLDER: &str = "(no response)";

/// Default persona for the hosted seat.
pub const DEFAULT_HOSTED_PERSONA: &str = "You are a sharp, articulate debater. \
Argue your position with conviction, respond directly to your opponent's last point, \
and keep every reply under 120 words. Do not prefix your reply with your name.";

/// Default persona for the local seat.
pub const DEFAULT_LOCAL_PERSONA: &str = "You are a witty, contrarian debater. \
Challenge your opponent's claims, offer counterexamples, and keep every reply under \
120 words. Do not prefix your reply with your name.";

/// The prompt that opens a debate on `topic`.
///
/// The topic is embedded verbatim.
#[must_use]
pub fn opening_prompt(topic: &str, speaker_name: &str) -> String {
    format!(
        "You are {speaker_name}. Open a debate on the following topic: \"{topic}\". \
State your position and your strongest argument."
    )
}

/// One transcript line for a message: `LABEL: content`.
#[must_use]
pub fn transcript_line(message: &Message, roster: &Roster) -> String {
    format!("{}: {}", roster.label(message.speaker), message.content)
}

/// Render the whole history as newline-joined transcript lines.
#[must_use]
pub fn render_transcript(history: &[Message], roster: &Roster) -> String {
    history
        .iter()
        .map(|m| transcript_line(m, roster))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The instruction telling a model that it speaks next.
#[must_use]
pub fn turn_instruction(speaker_name: &str) -> String {
    format!(
        "It is now your turn, {speaker_name}. Reply to the last message in the debate. \
Respond with your argument only."
    )
}

/// A single prompt carrying the flattened transcript plus the turn instruction.
#[must_use]
pub fn continuation_prompt(transcript: &str, speaker_name: &str) -> String {
    format!(
        "Here is the debate so far:\n\n{transcript}\n\n{}",
        turn_instruction(speaker_name)
    )
}

/// The single user prompt for a turn: opening or continuation.
#[must_use]
pub fn user_prompt(request: &TurnRequest<'_>) -> String {
    if request.is_opening() {
        opening_prompt(request.topic, request.speaker_name())
    } else {
        let transcript = render_transcript(request.history, request.roster);
        continuation_prompt(&transcript, request.speaker_name())
    }
}

/// Trim a raw model reply, substituting the placeholder when nothing is left.
#[must_use]
pub fn finalize_reply(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        EMPTY_REPLY_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Speaker;

    fn history() -> Vec<Message> {
        vec![
            Message::new(Speaker::A, "hi"),
            Message::new(Speaker::B, "hello"),
        ]
    }

    #[test]
    fn opening_prompt_contains_topic_verbatim() {
        let prompt = opening_prompt("Is a hot dog a sandwich?", "openai");
        assert!(prompt.contains("Is a hot dog a sandwich?"));
    }

    #[test]
    fn transcript_is_labelled_and_ordered() {
        let roster = Roster::default();
        let transcript = render_transcript(&history(), &roster);
        assert_eq!(transcript, "OPENAI: hi\nOLLAMA: hello");
    }

    #[test]
    fn empty_history_renders_empty_transcript() {
        assert_eq!(render_transcript(&[], &Roster::default()), "");
    }

    #[test]
    fn user_prompt_opens_on_empty_history() {
        let roster = Roster::default();
        let req = TurnRequest {
            speaker: Speaker::A,
            topic: "X",
            history: &[],
            roster: &roster,
        };
        let prompt = user_prompt(&req);
        assert!(prompt.contains("\"X\""));
        assert!(!prompt.contains("debate so far"));
    }

    #[test]
    fn user_prompt_continues_with_transcript() {
        let roster = Roster::default();
        let history = history();
        let req = TurnRequest {
            speaker: Speaker::A,
            topic: "X",
            history: &history,
            roster: &roster,
        };
        let prompt = user_prompt(&req);
        assert!(prompt.contains("OPENAI: hi\nOLLAMA: hello"));
        assert!(prompt.contains("It is now your turn, openai."));
    }

    #[test]
    fn finalize_reply_trims() {
        assert_eq!(finalize_reply("  point taken \n"), "point taken");
    }

    #[test]
    fn finalize_reply_substitutes_placeholder() {
        assert_eq!(finalize_reply(""), EMPTY_REPLY_PLACEHOLDER);
        assert_eq!(finalize_reply(" \n\t "), EMPTY_REPLY_PLACEHOLDER);
    }
}
