#![deny(missing_docs)]
//! Shared types for dialectic.
//!
//! Provides the [`TurnProvider`] trait that both model backends implement,
//! the conversation types the turn controller owns ([`Speaker`], [`Message`],
//! [`Roster`]), the prompt builders both backends share, and the
//! [`Snapshot`] export format.

pub mod error;
pub mod prompt;
pub mod provider;
pub mod snapshot;
pub mod types;

// Re-exports
pub use error::{ExportError, ProviderError};
pub use provider::TurnProvider;
pub use snapshot::Snapshot;
pub use types::*;
