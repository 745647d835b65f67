//! Provider trait for turn-producing model backends.
//!
//! The [`TurnProvider`] trait uses RPITIT (return-position `impl Trait` in
//! traits) and is NOT object-safe. The session driver is generic over its two
//! providers, so no dynamic dispatch is needed.

use std::future::Future;

use crate::error::ProviderError;
use crate::types::{Message, TurnRequest};

/// A model backend that can produce the next turn of a debate.
///
/// Implementations are stateless between calls: everything they need comes
/// in through the [`TurnRequest`]. The returned message must be tagged with
/// `request.speaker`.
pub trait TurnProvider: Send + Sync {
    /// Produce one reply for the seat named in the request.
    fn take_turn(
        &self,
        request: TurnRequest<'_>,
    ) -> impl Future<Output = Result<Message, ProviderError>> + Send;
}
