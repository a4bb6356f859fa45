//! Token manager for issuing, looking up, and revoking access tokens.
//!
//! The manager is a thin orchestration layer over a [`TokenStore`]: every
//! operation maps to at most one store call, and all persistence concerns
//! (expiration, durability, linearizability) live behind the store trait.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use tessera_auth::token::TokenManager;
//! use tessera_auth_memory::InMemoryTokenStore;
//!
//! let manager = TokenManager::new(Arc::new(InMemoryTokenStore::new()));
//! let token = manager.create_access_token_for_local_user("admin").await?;
//! ```

use std::sync::Arc;

use time::{Duration, OffsetDateTime};

use crate::AuthResult;
use crate::error::AuthError;
use crate::storage::token_store::TokenStore;
use crate::types::access_token::{AccessToken, LOCAL_USER};
use crate::types::authentication::AuthenticationContext;
use crate::types::refresh_token::RefreshToken;

/// Configuration for the token manager.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Lifetime stamped on tokens issued through a client flow.
    /// Local-user tokens are issued without an expiration.
    pub access_token_lifetime: Duration,

    /// Token type stamped on issued tokens.
    pub token_type: String,
}

impl TokenConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            access_token_lifetime: Duration::hours(1),
            token_type: "bearer".to_string(),
        }
    }

    /// Sets the access token lifetime for client-flow issuance.
    #[must_use]
    pub fn with_access_token_lifetime(mut self, lifetime: Duration) -> Self {
        self.access_token_lifetime = lifetime;
        self
    }

    /// Sets the token type stamped on issued tokens.
    #[must_use]
    pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = token_type.into();
        self
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Manager for the access/refresh token lifecycle.
///
/// Stateless: holds only the store handle and configuration, so a single
/// instance is safe to share across tasks. Concurrent issuance for the
/// same user produces multiple valid tokens; multiple sessions per user
/// are allowed.
pub struct TokenManager {
    /// Token persistence.
    store: Arc<dyn TokenStore>,

    /// Issuance configuration.
    config: TokenConfig,
}

impl TokenManager {
    /// Creates a manager with default configuration.
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self::with_config(store, TokenConfig::new())
    }

    /// Creates a manager with the given configuration.
    #[must_use]
    pub fn with_config(store: Arc<dyn TokenStore>, config: TokenConfig) -> Self {
        Self { store, config }
    }

    /// Gets the manager configuration.
    #[must_use]
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Finds live tokens held by a user, across all clients.
    ///
    /// An empty result is an empty collection, never an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lookup fails.
    pub async fn find_tokens_by_user_name(&self, user_name: &str) -> AuthResult<Vec<AccessToken>> {
        self.store
            .find_tokens_by_client_id_and_user_name(None, Some(user_name))
            .await
    }

    /// Finds live tokens issued to a client for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lookup fails.
    pub async fn find_tokens_by_client_id_and_user_name(
        &self,
        client_id: &str,
        user_name: &str,
    ) -> AuthResult<Vec<AccessToken>> {
        self.store
            .find_tokens_by_client_id_and_user_name(Some(client_id), Some(user_name))
            .await
    }

    /// Finds live tokens issued to a client, across all users.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lookup fails.
    pub async fn find_tokens_by_client_id(&self, client_id: &str) -> AuthResult<Vec<AccessToken>> {
        self.store
            .find_tokens_by_client_id_and_user_name(Some(client_id), None)
            .await
    }

    /// Mints an access token for an already-authenticated local principal.
    ///
    /// The token carries the [`LOCAL_USER`] client id, no expiration, no
    /// refresh token, and no authentication context. This bridges
    /// back-office sessions into the token model without a full OAuth 2.0
    /// handshake.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be persisted. Failure before
    /// persistence leaves no observable state change.
    pub async fn create_access_token_for_local_user(
        &self,
        user_name: &str,
    ) -> AuthResult<AccessToken> {
        let token = AccessToken::new(AccessToken::generate_value(), LOCAL_USER, user_name);
        self.store.store_access_token(&token, None).await?;
        tracing::debug!(user = %user_name, "issued local-user access token");
        Ok(token)
    }

    /// Reconstructing an authentication context from a token object is not
    /// supported through this manager; the context is recoverable only via
    /// the refresh-token path.
    ///
    /// # Errors
    ///
    /// Always returns [`AuthError::Unsupported`]. The store is never
    /// consulted.
    pub fn read_authentication(&self, _token: &AccessToken) -> AuthResult<AuthenticationContext> {
        Err(AuthError::unsupported("read_authentication"))
    }

    /// Reconstructing an authentication context from a bare token value is
    /// not supported through this manager.
    ///
    /// # Errors
    ///
    /// Always returns [`AuthError::Unsupported`]. The store is never
    /// consulted.
    pub fn read_authentication_by_value(&self, _value: &str) -> AuthResult<AuthenticationContext> {
        Err(AuthError::unsupported("read_authentication_by_value"))
    }

    /// Persists an access token with its authentication context.
    ///
    /// `auth` is `None` for tokens that carry no context, such as
    /// local-user tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    pub async fn store_access_token(
        &self,
        token: &AccessToken,
        auth: Option<&AuthenticationContext>,
    ) -> AuthResult<()> {
        self.store.store_access_token(token, auth).await
    }

    /// Reads an access token by value.
    ///
    /// Returns `None` for unknown or expired values.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lookup fails.
    pub async fn read_access_token(&self, value: &str) -> AuthResult<Option<AccessToken>> {
        self.store.read_access_token(value).await
    }

    /// Removes an access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    pub async fn remove_access_token(&self, token: &AccessToken) -> AuthResult<()> {
        self.store.remove_access_token(&token.value).await
    }

    /// Refresh-token persistence is not performed through this manager.
    ///
    /// Refresh tokens come into existence only as a side effect of
    /// client-flow issuance elsewhere; this path deliberately leaves the
    /// store untouched.
    ///
    /// # Errors
    ///
    /// Never fails.
    pub async fn store_refresh_token(
        &self,
        _refresh_token: &RefreshToken,
        _auth: Option<&AuthenticationContext>,
    ) -> AuthResult<()> {
        Ok(())
    }

    /// Reads a refresh token by value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lookup fails.
    pub async fn read_refresh_token(&self, value: &str) -> AuthResult<Option<RefreshToken>> {
        self.store.read_refresh_token(value).await
    }

    /// Reads the authentication context reachable through a refresh token.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lookup fails.
    pub async fn read_authentication_for_refresh_token(
        &self,
        refresh_token: &RefreshToken,
    ) -> AuthResult<Option<AuthenticationContext>> {
        self.store
            .read_authentication_for_refresh_token(&refresh_token.value)
            .await
    }

    /// Removes a refresh token by cascading to the access token minted
    /// from it.
    ///
    /// There is no independent refresh-token deletion through this path;
    /// revoking the refresh token always revokes its access token too.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    pub async fn remove_refresh_token(&self, refresh_token: &RefreshToken) -> AuthResult<()> {
        self.store
            .remove_access_token_using_refresh_token(&refresh_token.value)
            .await?;
        tracing::debug!("revoked refresh token and its access token");
        Ok(())
    }

    /// Removes the access token(s) minted from a refresh token.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    pub async fn remove_access_token_using_refresh_token(
        &self,
        refresh_token: &RefreshToken,
    ) -> AuthResult<()> {
        self.store
            .remove_access_token_using_refresh_token(&refresh_token.value)
            .await
    }

    /// Issues an access token for a client-flow authentication.
    ///
    /// Client id and principal are derived from the context, never from
    /// caller-supplied strings. The token expires after the configured
    /// access token lifetime and is persisted together with the context.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be persisted.
    pub async fn get_access_token(&self, auth: &AuthenticationContext) -> AuthResult<AccessToken> {
        let mut token = AccessToken::new(
            AccessToken::generate_value(),
            &auth.client_id,
            &auth.principal,
        );
        token.expiration = Some(OffsetDateTime::now_utc() + self.config.access_token_lifetime);
        token.token_type = self.config.token_type.clone();
        token.grant_type = auth.grant_type;

        self.store.store_access_token(&token, Some(auth)).await?;
        tracing::debug!(client_id = %auth.client_id, user = %auth.principal, "issued access token");
        Ok(token)
    }
}
