//! Error taxonomy shared by the core and the shell.

use serde::{Deserialize, Serialize};

/// Errors produced while acquiring, querying or resolving contests
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContestError {
    /// Transport failure, non-success HTTP status or a non-`OK` API status
    #[error("Network error: {0}")]
    Network(String),

    /// Payload did not match the expected schema
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Contest {0} not found")]
    NotFound(u64),

    /// Contract violation by the caller (e.g. a zero page size)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContestError {
    /// Whether retrying the same operation could succeed.
    ///
    /// Every variant except `InvalidArgument` is recoverable by a fresh call.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ContestError::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContestError::Network("HTTP 503".to_string()).to_string(),
            "Network error: HTTP 503"
        );
        assert_eq!(ContestError::NotFound(42).to_string(), "Contest 42 not found");
    }

    #[test]
    fn test_is_retryable() {
        assert!(ContestError::Network("x".to_string()).is_retryable());
        assert!(ContestError::Parse("x".to_string()).is_retryable());
        assert!(ContestError::NotFound(1).is_retryable());
        assert!(!ContestError::InvalidArgument("x".to_string()).is_retryable());
    }
}
