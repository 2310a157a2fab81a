//! Unified error type for API calls.
//!
//! The backend surfaces every failure the same way, so the client keeps
//! the taxonomy deliberately coarse: transport, non-success status, decode,
//! and credential-storage failures. Callers that need user-facing messages
//! map the whole error, not individual kinds.

use reqwest::StatusCode;
use thiserror::Error;

use crate::token::TokenStoreError;

/// Longest response-body prefix kept in a [`ApiError::Status`] and in
/// log output.
pub(crate) const BODY_SNIPPET_LEN: usize = 200;

/// Errors that can occur when calling the shop API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection, DNS, protocol).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {body}")]
    Status {
        /// Response status code.
        status: StatusCode,
        /// Truncated response body for diagnostics.
        body: String,
    },

    /// Response body did not match the expected entity shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Persisting the auth token failed after login/register.
    #[error("credential storage error: {0}")]
    Storage(#[from] TokenStoreError),
}

impl ApiError {
    /// Build a [`ApiError::Status`] with the body truncated for logging.
    pub(crate) fn status(status: StatusCode, body: &str) -> Self {
        Self::Status {
            status,
            body: body.chars().take(BODY_SNIPPET_LEN).collect(),
        }
    }

    /// Whether the error is a non-success HTTP status.
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::status(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(err.to_string(), "server returned 500 Internal Server Error: boom");
        assert!(err.is_status());
    }

    #[test]
    fn test_status_error_truncates_body() {
        let long = "x".repeat(1000);
        let err = ApiError::status(StatusCode::BAD_REQUEST, &long);
        if let ApiError::Status { body, .. } = err {
            assert_eq!(body.len(), BODY_SNIPPET_LEN);
        } else {
            panic!("expected status error");
        }
    }
}
