//! The turn-taking state machine.
//!
//! [`Session`] owns the topic, history and counters of one debate and is the
//! only thing that mutates them. A turn is split in two halves so a caller
//! can await the provider in between: [`Session::begin_turn`] checks the
//! guard and hands out a [`TurnTicket`], [`Session::complete_turn`] records
//! the outcome.
//!
//! ```text
//! idle ──start──▶ running ──cap reached──▶ finished
//!                  │  ▲  ╲──stop──▶ stopped ─┐
//!                  │  └──────resume──────────┤
//!                  └──provider error──▶ errored
//! ```

use std::fmt;

use dialectic_types::{Message, ProviderError, Snapshot, Speaker, TurnRequest};

use crate::config::SessionConfig;
use crate::error::SessionError;

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Never started, or reset.
    #[default]
    Idle,
    /// Taking turns.
    Running,
    /// Reached the round cap.
    Finished,
    /// Stopped by the user.
    Stopped,
    /// Halted by a failed turn.
    Errored,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Idle => "idle",
            Status::Running => "running",
            Status::Finished => "finished",
            Status::Stopped => "stopped",
            Status::Errored => "errored",
        };
        f.write_str(s)
    }
}

/// Proof that a turn was admitted by the guard.
///
/// Tickets are tied to one `start`/`reset` epoch; completing a ticket from an
/// earlier epoch is rejected with [`SessionError::StaleTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTicket {
    /// The seat whose turn it is.
    pub speaker: Speaker,
    epoch: u64,
}

/// State of a single debate.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    topic: String,
    history: Vec<Message>,
    current_speaker: Speaker,
    round_count: usize,
    running: bool,
    in_flight: bool,
    status: Status,
    last_error: Option<String>,
    epoch: u64,
}

impl Session {
    /// Create an idle session.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            topic: String::new(),
            history: Vec::new(),
            current_speaker: Speaker::A,
            round_count: 0,
            running: false,
            in_flight: false,
            status: Status::Idle,
            last_error: None,
            epoch: 0,
        }
    }

    /// Begin a new debate on `topic`, discarding any previous one.
    ///
    /// Any turn still in flight from the previous debate is orphaned: its
    /// ticket will be rejected on completion.
    pub fn start(&mut self, topic: impl Into<String>) {
        self.clear();
        self.topic = topic.into();
        if self.config.max_rounds == 0 {
            self.status = Status::Finished;
            return;
        }
        self.running = true;
        self.status = Status::Running;
    }

    /// Admit the next turn if the session is running, below the round cap,
    /// and not already waiting on a provider.
    pub fn begin_turn(&mut self) -> Result<TurnTicket, SessionError> {
        if self.in_flight {
            return Err(SessionError::TurnInFlight);
        }
        if !self.running {
            return Err(SessionError::NotRunning);
        }
        if self.round_count >= self.config.max_rounds {
            return Err(SessionError::RoundLimit(self.config.max_rounds));
        }
        self.in_flight = true;
        Ok(TurnTicket {
            speaker: self.current_speaker,
            epoch: self.epoch,
        })
    }

    /// The provider input for an admitted turn.
    #[must_use]
    pub fn turn_request(&self, ticket: &TurnTicket) -> TurnRequest<'_> {
        TurnRequest {
            speaker: ticket.speaker,
            topic: &self.topic,
            history: &self.history,
            roster: &self.config.roster,
        }
    }

    /// Record the outcome of an admitted turn.
    ///
    /// On success the reply is appended, the speaker flips and the round
    /// counter advances; hitting the cap finishes the session. A reply that
    /// arrives after [`stop`](Self::stop) is still recorded. On failure the
    /// session halts with its history intact.
    pub fn complete_turn(
        &mut self,
        ticket: TurnTicket,
        result: Result<Message, ProviderError>,
    ) -> Result<Message, SessionError> {
        if ticket.epoch != self.epoch {
            return Err(SessionError::StaleTurn);
        }
        self.in_flight = false;

        let message = match result {
            Ok(message) => message,
            Err(err) => {
                self.halt(err.to_string());
                return Err(SessionError::Provider(err));
            }
        };

        if message.speaker != ticket.speaker {
            let err = SessionError::SpeakerMismatch {
                expected: ticket.speaker,
                actual: message.speaker,
            };
            self.halt(err.to_string());
            return Err(err);
        }

        self.history.push(message.clone());
        self.current_speaker = self.current_speaker.other();
        self.round_count += 1;

        if self.round_count >= self.config.max_rounds {
            self.running = false;
            self.status = Status::Finished;
        }
        Ok(message)
    }

    /// Give up on an admitted turn without recording anything.
    ///
    /// Used when the caller stops waiting on the provider. The same speaker
    /// is asked again on the next turn. Returns `false` for a stale ticket.
    pub fn abandon_turn(&mut self, ticket: TurnTicket) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.in_flight = false;
        true
    }

    /// Stop scheduling further turns. History is kept.
    ///
    /// Has no effect unless the session is running.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.status = Status::Stopped;
        }
    }

    /// Continue a stopped or errored session from where it left off.
    pub fn resume(&mut self) -> Result<(), SessionError> {
        let resumable = matches!(self.status, Status::Stopped | Status::Errored)
            && self.round_count < self.config.max_rounds;
        if !resumable {
            return Err(SessionError::CannotResume(self.status));
        }
        self.running = true;
        self.status = Status::Running;
        self.last_error = None;
        Ok(())
    }

    /// Return to the idle state with an empty history.
    pub fn reset(&mut self) {
        self.clear();
    }

    /// Copy of the topic and history for export.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.topic.clone(), self.history.clone())
    }

    /// The debate topic.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// All messages so far.
    #[must_use]
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// The seat that speaks next.
    #[must_use]
    pub fn current_speaker(&self) -> Speaker {
        self.current_speaker
    }

    /// Completed turns so far.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.round_count
    }

    /// The configured round cap.
    #[must_use]
    pub fn max_rounds(&self) -> usize {
        self.config.max_rounds
    }

    /// Whether further turns will be admitted.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a turn is waiting on its provider.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Lifecycle state.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Text of the error that halted the session, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn halt(&mut self, error: String) {
        self.running = false;
        self.status = Status::Errored;
        self.last_error = Some(error);
    }

    fn clear(&mut self) {
        self.topic.clear();
        self.history.clear();
        self.current_speaker = Speaker::A;
        self.round_count = 0;
        self.running = false;
        self.in_flight = false;
        self.status = Status::Idle;
        self.last_error = None;
        self.epoch += 1;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
