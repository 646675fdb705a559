//! KMA client error types

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur while talking to the KMA services
#[derive(Debug, Error)]
pub enum KmaError {
    /// No service key configured
    #[error(
        "KMA API service key not found. Set KMA_SERVICE_KEY environment variable. Get your key at: https://www.data.go.kr"
    )]
    MissingServiceKey,

    /// Request parameters failed domain validation
    #[error(transparent)]
    InvalidInput(#[from] DomainError),

    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed or returned an unexpected HTTP status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// Configured timeout in seconds
        timeout_secs: u64,
    },

    /// Service returned a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Too many requests for this service key
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Response body was not the expected JSON document
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service answered with a non-success `resultCode`
    #[error("API Error {code}: {message}")]
    Api {
        /// `resultCode` from the response header
        code: String,
        /// `resultMsg` from the response header
        message: String,
    },
}

impl KmaError {
    /// Build an error from a reqwest failure
    ///
    /// The URL is stripped first since it carries the service key.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            Self::Timeout { timeout_secs }
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_message_points_to_env_var() {
        let msg = KmaError::MissingServiceKey.to_string();
        assert!(msg.contains("KMA_SERVICE_KEY"));
        assert!(msg.contains("data.go.kr"));
    }

    #[test]
    fn api_error_display() {
        let err = KmaError::Api {
            code: "30".to_string(),
            message: "SERVICE_KEY_IS_NOT_REGISTERED_ERROR".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API Error 30: SERVICE_KEY_IS_NOT_REGISTERED_ERROR"
        );
    }

    #[test]
    fn domain_errors_pass_through() {
        let err: KmaError = DomainError::InvalidCoordinates {
            latitude: 100.0,
            longitude: 0.0,
        }
        .into();
        assert!(err.to_string().starts_with("Invalid coordinates"));
    }

    #[test]
    fn timeout_display() {
        let err = KmaError::Timeout { timeout_secs: 30 };
        assert_eq!(err.to_string(), "Request timed out after 30 seconds");
    }
}
