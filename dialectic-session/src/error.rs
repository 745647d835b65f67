//! Errors from the turn controller.

use dialectic_types::{ProviderError, Speaker};

use crate::session::Status;

/// Errors from driving a debate session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session is not running (idle, finished, stopped or errored).
    #[error("session is not running")]
    NotRunning,
    /// Another turn is already waiting on its provider.
    #[error("a turn is already in flight")]
    TurnInFlight,
    /// The round cap has been reached.
    #[error("round limit reached ({0})")]
    RoundLimit(usize),
    /// A provider answered for the wrong seat.
    #[error("expected a reply from {expected}, got one from {actual}")]
    SpeakerMismatch {
        /// The seat whose turn it was.
        expected: Speaker,
        /// The seat the reply was tagged with.
        actual: Speaker,
    },
    /// The turn was issued before a `start` or `reset`; its result was dropped.
    #[error("turn result belongs to an earlier session and was discarded")]
    StaleTurn,
    /// Only stopped or errored sessions below the round cap can resume.
    #[error("cannot resume a session in state {0}")]
    CannotResume(Status),
    /// The provider call failed.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
}
