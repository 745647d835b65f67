//! Conversation types: speakers, messages, roster and turn requests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two fixed seats in a debate.
///
/// `A` always opens a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Speaker {
    /// The opening seat.
    #[default]
    A,
    /// The responding seat.
    B,
}

impl Speaker {
    /// The seat that speaks after this one.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Speaker::A => Speaker::B,
            Speaker::B => Speaker::A,
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::A => f.write_str("A"),
            Speaker::B => f.write_str("B"),
        }
    }
}

/// A single utterance in the debate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who said it.
    pub speaker: Speaker,
    /// What was said.
    pub content: String,
}

impl Message {
    /// Create a message for the given speaker.
    pub fn new(speaker: Speaker, content: impl Into<String>) -> Self {
        Self {
            speaker,
            content: content.into(),
        }
    }
}

/// Display names for the two seats.
///
/// Transcript lines are labelled with the uppercased name of each speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Name of seat A.
    pub a: String,
    /// Name of seat B.
    pub b: String,
}

impl Roster {
    /// Create a roster from the two seat names.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// The display name of a seat, as configured.
    #[must_use]
    pub fn name(&self, speaker: Speaker) -> &str {
        match speaker {
            Speaker::A => &self.a,
            Speaker::B => &self.b,
        }
    }

    /// The transcript label of a seat (its uppercased name).
    #[must_use]
    pub fn label(&self, speaker: Speaker) -> String {
        self.name(speaker).to_uppercase()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new("openai", "ollama")
    }
}

/// Everything a provider needs to produce one turn.
///
/// Borrowed from the session for the duration of a single outbound call.
#[derive(Debug, Clone, Copy)]
pub struct TurnRequest<'a> {
    /// The seat whose turn it is. The reply must be tagged with it.
    pub speaker: Speaker,
    /// The debate topic.
    pub topic: &'a str,
    /// All messages so far, in conversational order.
    pub history: &'a [Message],
    /// Seat names used to label transcript lines.
    pub roster: &'a Roster,
}

impl TurnRequest<'_> {
    /// Whether this is the opening turn of the session.
    #[must_use]
    pub fn is_opening(&self) -> bool {
        self.history.is_empty()
    }

    /// Display name of the seat whose turn it is.
    #[must_use]
    pub fn speaker_name(&self) -> &str {
        self.roster.name(self.speaker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaker_other_flips() {
        assert_eq!(Speaker::A.other(), Speaker::B);
        assert_eq!(Speaker::B.other(), Speaker::A);
    }

    #[test]
    fn speaker_defaults_to_a() {
        assert_eq!(Speaker::default(), Speaker::A);
    }

    #[test]
    fn roster_labels_are_uppercased() {
        let roster = Roster::new("gpt", "llama");
        assert_eq!(roster.name(Speaker::A), "gpt");
        assert_eq!(roster.label(Speaker::A), "GPT");
        assert_eq!(roster.label(Speaker::B), "LLAMA");
    }

    #[test]
    fn default_roster_names() {
        let roster = Roster::default();
        assert_eq!(roster.a, "openai");
        assert_eq!(roster.b, "ollama");
    }

    #[test]
    fn message_serde_shape() {
        let msg = Message::new(Speaker::B, "hello");
        let json = serde_json::to_value(&msg).expect("serialize");
        assert_eq!(json, serde_json::json!({"speaker": "B", "content": "hello"}));
    }

    #[test]
    fn turn_request_opening_detection() {
        let roster = Roster::default();
        let empty: Vec<Message> = Vec::new();
        let req = TurnRequest {
            speaker: Speaker::A,
            topic: "tabs vs spaces",
            history: &empty,
            roster: &roster,
        };
        assert!(req.is_opening());
        assert_eq!(req.speaker_name(), "openai");

        let history = vec![Message::new(Speaker::A, "tabs")];
        let req = TurnRequest {
            speaker: Speaker::B,
            history: &history,
            ..req
        };
        assert!(!req.is_opening());
        assert_eq!(req.speaker_name(), "ollama");
    }
}
