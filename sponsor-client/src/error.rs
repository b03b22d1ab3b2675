//! Client error types

use shared::ErrorBody;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status; `message` is the raw body
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Body did not decode into the expected type
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Row state machine used out of order
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Server error code from the `{code, message}` envelope, if the body has one
    pub fn error_code(&self) -> Option<u16> {
        match self {
            ClientError::Api { message, .. } => serde_json::from_str::<ErrorBody>(message)
                .ok()
                .map(|body| body.code),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_from_envelope() {
        let err = ClientError::Api {
            status: 404,
            message: r#"{"code":1001,"message":"Sponsor not found"}"#.into(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.error_code(), Some(1001));
    }

    #[test]
    fn test_plain_text_body_has_no_code() {
        let err = ClientError::Api {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.error_code(), None);
        assert_eq!(err.to_string(), "API error 502: Bad Gateway");
    }
}
