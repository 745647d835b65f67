//! Internal error helpers for mapping HTTP/reqwest errors to [`ProviderError`].

use std::time::Duration;

use dialectic_types::ProviderError;

/// Map a non-success HTTP status (from the OpenAI API) to a [`ProviderError`].
///
/// The status and body are kept verbatim so the session can surface them.
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> ProviderError {
    ProviderError::Http {
        status: status.as_u16(),
        body: body.to_string(),
    }
}

/// Map a [`reqwest::Error`] to a [`ProviderError`].
pub(crate) fn map_reqwest_error(err: reqwest::Error, timeout: Duration) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(timeout)
    } else if err.is_decode() {
        ProviderError::InvalidResponse(err.to_string())
    } else {
        ProviderError::Network(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_500_keeps_status_and_body() {
        let err = map_http_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        assert!(
            matches!(&err, ProviderError::Http { status: 500, body } if body == "Server error")
        );
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn map_401_keeps_status() {
        let err = map_http_status(reqwest::StatusCode::UNAUTHORIZED, "Invalid API key");
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[test]
    fn empty_body_preserved_in_error() {
        let err = map_http_status(reqwest::StatusCode::BAD_REQUEST, "");
        assert!(matches!(err, ProviderError::Http { status: 400, body } if body.is_empty()));
    }
}
