//! Export format for a finished (or interrupted) debate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::prompt::transcript_line;
use crate::types::{Message, Roster};

/// A point-in-time copy of a session's topic and history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// The debate topic.
    pub topic: String,
    /// All messages, in conversational order.
    pub history: Vec<Message>,
}

impl Snapshot {
    /// Create a snapshot from a topic and history.
    pub fn new(topic: impl Into<String>, history: Vec<Message>) -> Self {
        Self {
            topic: topic.into(),
            history,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot previously produced by [`Snapshot::to_json`].
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as plain text: a topic header followed by one labelled line per
    /// message, separated by blank lines.
    #[must_use]
    pub fn to_text(&self, roster: &Roster) -> String {
        let mut out = format!("Topic: {}\n", self.topic);
        for message in &self.history {
            out.push('\n');
            out.push_str(&transcript_line(message, roster));
            out.push('\n');
        }
        out
    }

    /// Write the snapshot to `path`.
    ///
    /// A `.json` extension selects JSON; anything else is written as text.
    pub fn write_to(&self, path: &Path, roster: &Roster) -> Result<(), ExportError> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let body = if is_json {
            self.to_json()?
        } else {
            self.to_text(roster)
        };
        std::fs::write(path, body)?;
        Ok(())
    }
}
