//! Overpass client errors

use thiserror::Error;

/// Errors returned by the Overpass client
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Connection to the Overpass API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the Overpass API failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the Overpass response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl OverpassError {
    /// Check if this error is worth retrying
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RateLimitExceeded | Self::ServiceUnavailable(_)
        )
    }
}
