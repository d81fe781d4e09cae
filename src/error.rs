// src/error.rs

//! Unified error handling for the roster client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Required field missing or value outside the allowed set
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing, blank or rejected session token
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// HTTP request failed before a response was read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response without a usable message
    #[error("Request failed with status {status}")]
    Status { status: u16 },

    /// Non-2xx response carrying a `message` field
    #[error("{message}")]
    Server { status: u16, message: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification used when deciding how to present a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Authorization,
    Network,
    ServerReported,
    Local,
}

impl AppError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an authorization error.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::Authorization(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a server-reported error.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Authorization(_) => ErrorKind::Authorization,
            Self::Http(_) | Self::Status { .. } => ErrorKind::Network,
            Self::Server { .. } => ErrorKind::ServerReported,
            Self::Io(_) | Self::Json(_) | Self::Toml(_) | Self::Url(_) | Self::Config(_) => {
                ErrorKind::Local
            }
        }
    }

    /// Message to show the user.
    ///
    /// Server and validation messages are shown verbatim; everything else
    /// collapses to the caller's generic `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message)
            | Self::Authorization(message)
            | Self::Server { message, .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = AppError::server(409, "Student with this USN already exists");
        assert_eq!(err.kind(), ErrorKind::ServerReported);
        assert_eq!(
            err.user_message("Error submitting student data."),
            "Student with this USN already exists"
        );
    }

    #[test]
    fn status_error_uses_fallback() {
        let err = AppError::Status { status: 500 };
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(
            err.user_message("Error fetching students."),
            "Error fetching students."
        );
    }

    #[test]
    fn validation_keeps_own_message() {
        let err = AppError::validation("Please select branch, class, and subject.");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.user_message("ignored"),
            "Please select branch, class, and subject."
        );
    }
}
