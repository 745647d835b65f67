#![deny(missing_docs)]
//! Ollama local model turn provider for dialectic.
//!
//! Implements [`dialectic_types::TurnProvider`] for Ollama's `/api/chat`
//! endpoint. Ollama runs models locally, so there are no auth headers.

pub mod client;
pub(crate) mod error;
pub(crate) mod mapping;
pub mod types;

pub use client::Ollama;

// Re-export for convenience
pub use dialectic_types::{ProviderError, TurnProvider};
