//! Automatic alternating turns over two providers.
//!
//! [`Debate`] binds seat A and seat B to their providers and drives a
//! [`Session`]: one turn immediately after start, then one more after each
//! fixed delay, until the round cap, a failed turn, or cancellation.

use dialectic_types::{Message, ProviderError, Snapshot, Speaker, TurnProvider};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::session::{Session, Status, TurnTicket};

/// Progress notifications emitted while a debate runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new debate began.
    Started {
        /// The debate topic.
        topic: String,
    },
    /// A turn completed and its reply was appended.
    Turn {
        /// Completed rounds, including this one.
        round: usize,
        /// The reply.
        message: Message,
    },
    /// A turn failed; the session halted.
    Failed {
        /// Error text.
        error: String,
    },
    /// The round cap was reached.
    Finished,
    /// The session was stopped by the user.
    Stopped,
}

/// A two-seat debate driven by a cooperative timer loop.
pub struct Debate<A: TurnProvider, B: TurnProvider> {
    seat_a: A,
    seat_b: B,
    session: Session,
    events: Option<UnboundedSender<SessionEvent>>,
}

impl<A: TurnProvider, B: TurnProvider> Debate<A, B> {
    /// Bind seat A and seat B to their providers.
    #[must_use]
    pub fn new(seat_a: A, seat_b: B, config: SessionConfig) -> Self {
        Self {
            seat_a,
            seat_b,
            session: Session::new(config),
            events: None,
        }
    }

    /// Send progress notifications to `sender`.
    #[must_use]
    pub fn with_events(mut self, sender: UnboundedSender<SessionEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    /// Read-only view of the session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Arm a new debate on `topic`, discarding any previous one.
    ///
    /// Does not take a turn by itself. [`run_topic`](Self::run_topic) starts
    /// a debate and takes its first turn at once; after `start`, call
    /// [`run`](Self::run) or [`advance_turn`](Self::advance_turn).
    pub fn start(&mut self, topic: impl Into<String>) {
        self.session.start(topic);
        tracing::info!(
            topic = %self.session.topic(),
            max_rounds = self.session.max_rounds(),
            "debate started"
        );
        self.emit(SessionEvent::Started {
            topic: self.session.topic().to_string(),
        });
        if self.session.status() == Status::Finished {
            self.emit(SessionEvent::Finished);
        }
    }

    /// Take exactly one turn with the provider bound to the current speaker.
    ///
    /// Fails without calling a provider when the session is not running, is
    /// at its round cap, or already has a turn in flight.
    ///
    /// Dropping the returned future before it resolves abandons the turn:
    /// nothing is appended and the same speaker goes next.
    pub async fn advance_turn(&mut self) -> Result<Message, SessionError> {
        let ticket = self.session.begin_turn()?;
        let round = self.session.round_count() + 1;
        tracing::debug!(speaker = %ticket.speaker, round, "taking turn");

        let outcome = {
            let pending = PendingTurn {
                session: &mut self.session,
                ticket: Some(ticket),
            };
            let request = pending.session.turn_request(&ticket);
            let result = match ticket.speaker {
                Speaker::A => self.seat_a.take_turn(request).await,
                Speaker::B => self.seat_b.take_turn(request).await,
            };
            pending.complete(result)
        };

        match outcome {
            Ok(message) => {
                tracing::info!(speaker = %message.speaker, round, "turn completed");
                self.emit(SessionEvent::Turn {
                    round,
                    message: message.clone(),
                });
                if self.session.status() == Status::Finished {
                    tracing::info!(rounds = round, "debate finished");
                    self.emit(SessionEvent::Finished);
                }
                Ok(message)
            }
            Err(SessionError::StaleTurn) => Err(SessionError::StaleTurn),
            Err(err) => {
                tracing::warn!(speaker = %ticket.speaker, round, error = %err, "turn failed");
                self.emit(SessionEvent::Failed {
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Keep taking turns until the session stops running.
    ///
    /// The first turn is taken immediately; each later one waits the
    /// configured delay after the previous completion. Cancelling `cancel`
    /// stops the session: during the delay it takes effect at once, during a
    /// turn it takes effect once that turn's reply is recorded.
    pub async fn run(&mut self, cancel: &CancellationToken) -> Status {
        let delay = self.session.config().turn_delay;

        while self.session.is_running() {
            if cancel.is_cancelled() {
                self.stop();
                break;
            }

            match self.advance_turn().await {
                // Failed turns halt the session and are reported as events.
                Ok(_) | Err(SessionError::Provider(_) | SessionError::SpeakerMismatch { .. }) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "turn not admitted, stopping");
                    self.stop();
                    break;
                }
            }

            if !self.session.is_running() {
                break;
            }
            if cancel.is_cancelled() {
                self.stop();
                break;
            }

            tokio::select! {
                _ = cancel.cancelled() => {
                    self.stop();
                    break;
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }

        self.session.status()
    }

    /// Start a debate on `topic`, take the first turn immediately, and keep
    /// going until the round cap, a failure, or cancellation.
    pub async fn run_topic(
        &mut self,
        topic: impl Into<String>,
        cancel: &CancellationToken,
    ) -> Status {
        self.start(topic);
        self.run(cancel).await
    }

    /// Stop scheduling further turns, keeping the history.
    pub fn stop(&mut self) {
        if self.session.is_running() {
            self.session.stop();
            tracing::info!(rounds = self.session.round_count(), "debate stopped");
            self.emit(SessionEvent::Stopped);
        }
    }

    /// Make a stopped or errored debate runnable again.
    pub fn resume(&mut self) -> Result<(), SessionError> {
        self.session.resume()?;
        tracing::info!(rounds = self.session.round_count(), "debate resumed");
        Ok(())
    }

    /// Clear the debate back to the idle state.
    pub fn reset(&mut self) {
        self.session.reset();
        tracing::debug!("debate reset");
    }

    /// Copy of the topic and history for export.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(sender) = &self.events {
            // A dropped receiver just means nobody is listening any more.
            let _ = sender.send(event);
        }
    }
}

/// An admitted turn that is released if its future is dropped mid-call.
struct PendingTurn<'s> {
    session: &'s mut Session,
    ticket: Option<TurnTicket>,
}

impl PendingTurn<'_> {
    fn complete(mut self, result: Result<Message, ProviderError>) -> Result<Message, SessionError> {
        match self.ticket.take() {
            Some(ticket) => self.session.complete_turn(ticket, result),
            None => Err(SessionError::StaleTurn),
        }
    }
}

impl Drop for PendingTurn<'_> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            if self.session.abandon_turn(ticket) {
                tracing::debug!(speaker = %ticket.speaker, "turn abandoned");
            }
        }
    }
}
