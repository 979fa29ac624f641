//! Client error types.
//!
//! Provides the error taxonomy for API operations.

use serde_json::Value;

/// Errors surfaced by API calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Request could not be sent or no response was received.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// Request timed out before a response arrived.
    #[error("request timeout")]
    Timeout,

    /// Server answered with a non-2xx status.
    #[error("API responded with status {status}: {raw}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body decoded as JSON, when parseable.
        body: Option<Value>,
        /// Raw response body text, possibly empty.
        raw: String,
    },

    /// Successful response carried a body that was not valid JSON or did
    /// not match the expected shape.
    #[error("decode failure: {0}")]
    Decode(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Builds a `Status` error from a non-2xx response, keeping the raw
    /// body and decoding it as JSON when possible.
    #[must_use]
    pub fn from_status(status: u16, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let body = serde_json::from_str(&raw).ok();
        Self::Status { status, body, raw }
    }

    /// Returns the HTTP status code for `Status` errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::from_status(404, r#"{"error":"not found"}"#);
        assert_eq!(
            err.to_string(),
            r#"API responded with status 404: {"error":"not found"}"#
        );
    }

    #[test]
    fn test_error_timeout() {
        let err = ClientError::Timeout;
        assert_eq!(err.to_string(), "request timeout");
    }

    #[test]
    fn test_error_decode() {
        let err = ClientError::Decode("expected a map".to_string());
        assert_eq!(err.to_string(), "decode failure: expected a map");
    }

    #[test]
    fn test_error_invalid_config() {
        let err = ClientError::InvalidConfig("base_url cannot be empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: base_url cannot be empty"
        );
    }

    #[test]
    fn test_from_status_decodes_json_body() {
        let err = ClientError::from_status(404, r#"{"error":"not found"}"#);
        match err {
            ClientError::Status { status, body, raw } => {
                assert_eq!(status, 404);
                assert_eq!(body, Some(serde_json::json!({"error": "not found"})));
                assert_eq!(raw, r#"{"error":"not found"}"#);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_status_keeps_unparseable_body_raw() {
        let err = ClientError::from_status(502, "Bad Gateway");
        match err {
            ClientError::Status { status, body, raw } => {
                assert_eq!(status, 502);
                assert!(body.is_none());
                assert_eq!(raw, "Bad Gateway");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_status_accessor() {
        let err = ClientError::from_status(429, "");
        assert_eq!(err.status(), Some(429));
        assert_eq!(ClientError::Timeout.status(), None);
    }
}
