#![deny(missing_docs)]
//! Turn controller for dialectic.
//!
//! [`Session`] is the state machine: it owns the history, decides whose turn
//! is next, enforces the round cap and allows at most one turn in flight.
//! [`Debate`] binds the two seats to their [`TurnProvider`]s and runs the
//! automatic continuation loop on tokio.
//!
//! [`TurnProvider`]: dialectic_types::TurnProvider

pub mod config;
pub mod debate;
pub mod error;
pub mod session;

pub use config::{DEFAULT_MAX_ROUNDS, DEFAULT_TURN_DELAY, SessionConfig};
pub use debate::{Debate, SessionEvent};
pub use error::SessionError;
pub use session::{Session, Status, TurnTicket};
