#![deny(missing_docs)]
//! OpenAI Chat Completions turn provider for dialectic.
//!
//! Implements [`dialectic_types::TurnProvider`] for the hosted seat of a
//! debate. Each turn is a single non-streaming request carrying the persona
//! as the system message and the opening prompt or flattened transcript as
//! the only user message.
//!
//! ```no_run
//! use dialectic_provider_openai::OpenAi;
//!
//! let provider = OpenAi::new("your-api-key").model("gpt-4o-mini");
//! ```

pub mod client;
pub(crate) mod error;
pub(crate) mod mapping;
pub mod types;

pub use client::OpenAi;

// Re-export for convenience
pub use dialectic_types::{ProviderError, TurnProvider};
