#![deny(missing_docs)]
//! # dialectic — umbrella crate
//!
//! Two language models debate a topic, one turn at a time. This crate
//! re-exports the turn controller, both providers and the shared types, plus
//! a `prelude` for the happy path.
//!
//! ```no_run
//! use dialectic::prelude::*;
//!
//! # async fn demo() {
//! let mut debate = Debate::new(
//!     OpenAi::new("sk-..."),
//!     Ollama::new(),
//!     SessionConfig::default(),
//! );
//! let status = debate
//!     .run_topic("Is a hot dog a sandwich?", &CancellationToken::new())
//!     .await;
//! println!("{status}: {} turns", debate.session().round_count());
//! # }
//! ```

pub use dialectic_provider_ollama;
pub use dialectic_provider_openai;
pub use dialectic_session;
pub use dialectic_types;

/// Happy-path imports for running a debate.
pub mod prelude {
    pub use dialectic_provider_ollama::Ollama;
    pub use dialectic_provider_openai::OpenAi;
    pub use dialectic_session::{
        Debate, Session, SessionConfig, SessionError, SessionEvent, Status,
    };
    pub use dialectic_types::{
        Message, ProviderError, Roster, Snapshot, Speaker, TurnProvider, TurnRequest,
    };
    pub use tokio_util::sync::CancellationToken;
}
