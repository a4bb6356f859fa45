//! Access token domain type.
//!
//! This module defines the access token structure persisted by a
//! [`TokenStore`](crate::storage::TokenStore) implementation. The token
//! value is an opaque random string; no claims are embedded in it.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::grant_type::GrantType;
use crate::types::refresh_token::RefreshToken;

/// Client id sentinel for tokens minted outside any OAuth 2.0 client flow.
///
/// Tokens carrying this client id were created for an already-authenticated
/// local principal (for example a CMS back-office session bridged into the
/// token model) rather than issued to a registered client. Callers should
/// branch on [`AccessToken::provenance`] instead of comparing against this
/// constant directly.
pub const LOCAL_USER: &str = "LOCAL_USER";

/// Provenance of an access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenProvenance {
    /// Minted for a locally authenticated principal, outside any client flow.
    LocalUser,
    /// Issued to a registered OAuth 2.0 client.
    OAuthClient,
}

/// Access token stored by the token store.
///
/// The `value` is the credential itself and is unique among live tokens.
/// `client_id` + `local_user` is not unique: a user may hold tokens from
/// multiple clients, or several tokens from the same client, at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    /// Opaque token value presented by clients. Unique per live token.
    pub value: String,

    /// Client the token was issued to, or [`LOCAL_USER`].
    pub client_id: String,

    /// Username of the principal the token represents.
    pub local_user: String,

    /// When this token expires (None = non-expiring).
    ///
    /// Expiration is interpreted by the store: expired tokens are simply
    /// not returned by read operations.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub expiration: Option<OffsetDateTime>,

    /// Token type, e.g. `"bearer"`.
    pub token_type: String,

    /// Grant the token was issued through, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<GrantType>,

    /// Refresh token this access token was minted from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<RefreshToken>,
}

impl AccessToken {
    /// Creates a bearer token with no expiration, grant type, or refresh token.
    #[must_use]
    pub fn new(
        value: impl Into<String>,
        client_id: impl Into<String>,
        local_user: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            client_id: client_id.into(),
            local_user: local_user.into(),
            expiration: None,
            token_type: "bearer".to_string(),
            grant_type: None,
            refresh_token: None,
        }
    }

    /// Returns `true` if this token has expired.
    ///
    /// Tokens without an expiration never expire.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expiration
            .map(|exp| OffsetDateTime::now_utc() > exp)
            .unwrap_or(false)
    }

    /// Returns where this token came from.
    #[must_use]
    pub fn provenance(&self) -> TokenProvenance {
        if self.client_id == LOCAL_USER {
            TokenProvenance::LocalUser
        } else {
            TokenProvenance::OAuthClient
        }
    }

    /// Generate a cryptographically secure random token value.
    ///
    /// Returns a 256-bit random value encoded as base64url (43 characters).
    #[must_use]
    pub fn generate_value() -> String {
        use base64::Engine;
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;

        let mut bytes = [0u8; 32];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    #[test]
    fn test_new_defaults() {
        let token = AccessToken::new("value", "client", "user");
        assert_eq!(token.value, "value");
        assert_eq!(token.client_id, "client");
        assert_eq!(token.local_user, "user");
        assert_eq!(token.token_type, "bearer");
        assert!(token.expiration.is_none());
        assert!(token.grant_type.is_none());
        assert!(token.refresh_token.is_none());
    }

    #[test]
    fn test_generate_value() {
        let value = AccessToken::generate_value();

        // 32 bytes base64url encoded = 43 characters
        assert_eq!(value.len(), 43);

        // Should be URL-safe base64
        assert!(
            value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_value_uniqueness() {
        let values: Vec<String> = (0..100).map(|_| AccessToken::generate_value()).collect();

        let mut unique = values.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(values.len(), unique.len());
    }

    #[test]
    fn test_is_expired() {
        let now = OffsetDateTime::now_utc();

        // Never expires
        let token = AccessToken::new("value", "client", "user");
        assert!(!token.is_expired());

        // Future expiration
        let mut token = AccessToken::new("value", "client", "user");
        token.expiration = Some(now + Duration::hours(1));
        assert!(!token.is_expired());

        // Expired
        let mut token = AccessToken::new("value", "client", "user");
        token.expiration = Some(now - Duration::minutes(1));
        assert!(token.is_expired());
    }

    #[test]
    fn test_provenance() {
        let token = AccessToken::new("value", LOCAL_USER, "user");
        assert_eq!(token.provenance(), TokenProvenance::LocalUser);

        let token = AccessToken::new("value", "portal-app", "user");
        assert_eq!(token.provenance(), TokenProvenance::OAuthClient);
    }

    #[test]
    fn test_serialization() {
        let mut token = AccessToken::new("value", "client", "user");
        token.expiration = Some(OffsetDateTime::now_utc() + Duration::hours(1));
        token.grant_type = Some(GrantType::Password);
        token.refresh_token = Some(RefreshToken::new("refresh"));

        let json = serde_json::to_string(&token).unwrap();
        let deserialized: AccessToken = serde_json::from_str(&json).unwrap();

        assert_eq!(token.value, deserialized.value);
        assert_eq!(token.client_id, deserialized.client_id);
        assert_eq!(token.local_user, deserialized.local_user);
        assert_eq!(token.grant_type, deserialized.grant_type);
        assert_eq!(token.refresh_token, deserialized.refresh_token);
    }
}
