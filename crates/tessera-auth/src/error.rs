//! Authorization error types.
//!
//! This module defines all error types that can occur during token
//! management operations.

/// Errors that can occur during token management operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The operation is not supported by this component, by design.
    #[error("Unsupported operation: {operation}")]
    Unsupported {
        /// Name of the unsupported operation.
        operation: String,
    },

    /// An error occurred while storing or retrieving token data.
    ///
    /// Store failures propagate unwrapped; the manager performs no local
    /// recovery or retry.
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage error.
        message: String,
    },

    /// An unexpected internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl AuthError {
    /// Creates a new `Unsupported` error.
    #[must_use]
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    /// Creates a new `Storage` error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns `true` if this error reports a caller mistake.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// Returns `true` if this is a server-side failure.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::Internal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::unsupported("read_authentication");
        assert_eq!(
            err.to_string(),
            "Unsupported operation: read_authentication"
        );

        let err = AuthError::storage("database down");
        assert_eq!(err.to_string(), "Storage error: database down");

        let err = AuthError::internal("lock poisoned");
        assert_eq!(err.to_string(), "Internal error: lock poisoned");
    }

    #[test]
    fn test_error_predicates() {
        let err = AuthError::unsupported("read_authentication");
        assert!(err.is_client_error());
        assert!(!err.is_server_error());

        let err = AuthError::storage("database down");
        assert!(!err.is_client_error());
        assert!(err.is_server_error());
    }
}
