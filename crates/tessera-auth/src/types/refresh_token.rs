//! Refresh token domain type.

use serde::{Deserialize, Serialize};

/// Refresh token associated with an access token.
///
/// Refresh tokens allow clients to obtain new access tokens without
/// requiring user re-authentication. The token is an opaque string; the
/// store keeps the association between a refresh token and the access
/// token minted from it, and guarantees that at most one live access
/// token references a given refresh token at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshToken {
    /// The opaque token value presented by clients.
    pub value: String,
}

impl RefreshToken {
    /// Creates a refresh token wrapping the given opaque value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl std::fmt::Display for RefreshToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let token = RefreshToken::new("refresh-value");
        assert_eq!(token.value, "refresh-value");
        assert_eq!(token.to_string(), "refresh-value");
    }

    #[test]
    fn test_serialization() {
        let token = RefreshToken::new("refresh-value");
        let json = serde_json::to_string(&token).unwrap();
        let deserialized: RefreshToken = serde_json::from_str(&json).unwrap();
        assert_eq!(token, deserialized);
    }
}
