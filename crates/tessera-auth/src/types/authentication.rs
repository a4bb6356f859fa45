//! Authentication context captured at token issuance.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::grant_type::GrantType;

/// Validated identity and request metadata captured when a token is issued.
///
/// Stored alongside an access token so later validation can recover who
/// the token was issued for. Tokens minted for local users carry no
/// context; the store accepts its absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationContext {
    /// Username of the authenticated principal.
    pub principal: String,

    /// Client the authentication was performed through.
    pub client_id: String,

    /// Granted scopes (space-separated), when the flow negotiated any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Grant the authentication was performed through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<GrantType>,

    /// When the principal was authenticated.
    #[serde(with = "time::serde::rfc3339")]
    pub authenticated_at: OffsetDateTime,
}

impl AuthenticationContext {
    /// Creates a context for a principal authenticated through a client,
    /// stamped with the current time.
    #[must_use]
    pub fn new(principal: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
            client_id: client_id.into(),
            scope: None,
            grant_type: None,
            authenticated_at: OffsetDateTime::now_utc(),
        }
    }

    /// Sets the granted scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the grant type.
    #[must_use]
    pub fn with_grant_type(mut self, grant_type: GrantType) -> Self {
        self.grant_type = Some(grant_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let context = AuthenticationContext::new("username", "clientId")
            .with_scope("read write")
            .with_grant_type(GrantType::Password);

        assert_eq!(context.principal, "username");
        assert_eq!(context.client_id, "clientId");
        assert_eq!(context.scope.as_deref(), Some("read write"));
        assert_eq!(context.grant_type, Some(GrantType::Password));
    }

    #[test]
    fn test_serialization() {
        let context = AuthenticationContext::new("username", "clientId").with_scope("read");

        let json = serde_json::to_string(&context).unwrap();
        let deserialized: AuthenticationContext = serde_json::from_str(&json).unwrap();

        assert_eq!(context.principal, deserialized.principal);
        assert_eq!(context.client_id, deserialized.client_id);
        assert_eq!(context.scope, deserialized.scope);
    }
}
