//! Configuration types for a debate session.

use std::time::Duration;

use dialectic_types::Roster;

/// Rounds played before a session finishes on its own.
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Pause between the end of one turn and the start of the next.
pub const DEFAULT_TURN_DELAY: Duration = Duration::from_millis(2000);

/// Configuration for a debate session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Number of completed turns after which the session finishes.
    pub max_rounds: usize,
    /// Delay between a completed turn and the next automatic one.
    pub turn_delay: Duration,
    /// Display names for the two seats.
    pub roster: Roster,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            turn_delay: DEFAULT_TURN_DELAY,
            roster: Roster::default(),
        }
    }
}
