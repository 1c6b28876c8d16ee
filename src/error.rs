//! # Client Error Types
//!
//! Unified error handling for every StepUp API operation. Each failure is terminal
//! for the call that produced it and reaches the caller through `ClientResult`.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// The token provider could not supply a bearer token, so nothing was sent.
    #[error("Unable to make request: {0}")]
    UnableToMakeRequest(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Failed to encode request body: {0}")]
    BodyEncodingFailed(#[source] serde_json::Error),

    /// Transport failure (`status: None`) or a non-2xx response.
    #[error("Network error{}: {message}", status_suffix(.status))]
    NetworkError {
        status: Option<u16>,
        message: String,
    },

    #[error("Failed to decode {operation} response: {source}")]
    DecodingFailed {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl ClientError {
    /// Create an error for a failed token acquisition
    pub fn unable_to_make_request(reason: impl Into<String>) -> Self {
        Self::UnableToMakeRequest(reason.into())
    }

    /// Create a request construction error
    pub fn malformed_request(reason: impl Into<String>) -> Self {
        Self::MalformedRequest(reason.into())
    }

    /// Create a transport-level error with no HTTP status
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            status: None,
            message: message.into(),
        }
    }

    /// Create an error from a non-2xx HTTP response
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::NetworkError {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn decoding_failed(operation: impl Into<String>, source: serde_json::Error) -> Self {
        Self::DecodingFailed {
            operation: operation.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// HTTP status of the failed response, if the server answered at all
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::NetworkError { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if a caller-level retry could succeed. The client itself never retries.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::NetworkError { status: None, .. } => true,
            ClientError::NetworkError {
                status: Some(status),
                ..
            } => *status >= 500,
            ClientError::UnableToMakeRequest(_) => true,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            return ClientError::malformed_request(error.to_string());
        }
        ClientError::NetworkError {
            status: error.status().map(|s| s.as_u16()),
            message: error.to_string(),
        }
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(error: config::ConfigError) -> Self {
        ClientError::config_error(error.to_string())
    }
}
