//! Service error types.

use thiserror::Error;

/// Errors that can occur when calling the video-intelligence API.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// HTTP transport or body decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status the call does not accept.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API answered successfully but the body was not what we expected.
    #[error("parse error: {0}")]
    Parse(String),

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The configured API key cannot be sent as a header.
    #[error("invalid API key: {0}")]
    Credential(String),
}

impl ServiceError {
    /// Whether the service itself answered (as opposed to transport or
    /// decoding failures on our side).
    #[must_use]
    pub const fn is_http_status(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::RateLimited { .. })
    }
}
