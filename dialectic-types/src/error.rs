//! Error types shared by the dialectic crates.

use std::time::Duration;

/// Errors from a model backend while producing a turn.
///
/// None of these are retried; the session halts on the first one.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Network-level error (connection refused, DNS failure, etc.).
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Request timed out.
    #[error("timeout after {0:?}")]
    Timeout(Duration),
    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Upstream status code.
        status: u16,
        /// Upstream response body text.
        body: String,
    },
    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// Any other provider error.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl ProviderError {
    /// The upstream status code, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors from exporting or importing a [`Snapshot`](crate::Snapshot).
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// JSON (de)serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading or writing the export file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
