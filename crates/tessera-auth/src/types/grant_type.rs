//! OAuth 2.0 grant types.

use serde::{Deserialize, Serialize};

/// OAuth 2.0 grant types.
///
/// Identifies the authorization flow a token was issued through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Authorization Code flow.
    AuthorizationCode,
    /// Client Credentials flow (confidential clients only).
    ClientCredentials,
    /// Refresh Token flow.
    RefreshToken,
    /// Resource Owner Password Credentials flow.
    /// WARNING: This grant type is considered legacy and should only be used
    /// for trusted first-party applications or migration scenarios.
    Password,
}

impl GrantType {
    /// Returns the OAuth 2.0 grant_type parameter value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization_code",
            Self::ClientCredentials => "client_credentials",
            Self::RefreshToken => "refresh_token",
            Self::Password => "password",
        }
    }
}

impl std::fmt::Display for GrantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(GrantType::AuthorizationCode.as_str(), "authorization_code");
        assert_eq!(GrantType::ClientCredentials.as_str(), "client_credentials");
        assert_eq!(GrantType::RefreshToken.as_str(), "refresh_token");
        assert_eq!(GrantType::Password.as_str(), "password");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&GrantType::Password).unwrap();
        assert_eq!(json, "\"password\"");

        let parsed: GrantType = serde_json::from_str("\"authorization_code\"").unwrap();
        assert_eq!(parsed, GrantType::AuthorizationCode);
    }
}
