//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the client using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Substring the backend uses in its rate-limit messages
pub const RATE_LIMIT_MARKER: &str = "too many requests";

/// The main error type for fintrack operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors raised before any request is sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// No access token is available for a protected endpoint
    #[error("Not authenticated: set an access token first")]
    NotAuthenticated,

    /// The backend asked us to slow down
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a failure envelope or a non-2xx status
    #[error("{message}")]
    Api {
        status: Option<u16>,
        message: String,
    },

    /// The capability exists in the data model but has no backend support
    #[error("{0} are not supported yet")]
    Unsupported(&'static str),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinanceError {
    /// Classify a failed envelope into the matching error variant
    pub fn from_api(status: Option<u16>, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == Some(429) || message.to_lowercase().contains(RATE_LIMIT_MARKER) {
            return Self::RateLimited(message);
        }
        Self::Api { status, message }
    }

    /// Create a "not found" error for an entity label
    pub fn not_found(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the backend rate-limited the request
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }

    /// Whether repeating the same request could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimited(_) => true,
            Self::Api { status, .. } => !matches!(status, Some(400..=404) | Some(422)),
            _ => false,
        }
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FinanceResult<T> = Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinanceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = FinanceError::not_found("Transaction", "txn_42");
        assert_eq!(err.to_string(), "Transaction not found: txn_42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_rate_limit_detected_from_message() {
        let err = FinanceError::from_api(Some(400), "Too many requests, slow down");
        assert!(err.is_rate_limited());
    }

    #[test]
    fn test_rate_limit_detected_from_status() {
        let err = FinanceError::from_api(Some(429), "Slow down");
        assert!(err.is_rate_limited());
    }

    #[test]
    fn test_plain_api_error() {
        let err = FinanceError::from_api(Some(500), "Internal server error");
        assert_eq!(err.to_string(), "Internal server error");
        assert!(!err.is_rate_limited());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        assert!(!FinanceError::from_api(Some(404), "missing").is_retryable());
        assert!(!FinanceError::Validation("x".into()).is_retryable());
        assert!(!FinanceError::NotAuthenticated.is_retryable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinanceError = io_err.into();
        assert!(matches!(err, FinanceError::Io(_)));
    }
}
