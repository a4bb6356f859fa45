//! Token store trait.
//!
//! This module defines the storage interface for access and refresh tokens
//! and their authentication contexts.
//!
//! # Contract
//!
//! - Reads of unknown keys return `Ok(None)` or an empty collection, never
//!   an error.
//! - Expiration is interpreted here: read operations must not return
//!   expired access tokens.
//! - Concurrent `store`/`remove` on the same token value must be
//!   linearizable; no caller may observe a half-written token.

use async_trait::async_trait;

use crate::AuthResult;
use crate::types::access_token::AccessToken;
use crate::types::authentication::AuthenticationContext;
use crate::types::refresh_token::RefreshToken;

/// Storage trait for access tokens, refresh tokens, and authentication
/// contexts.
///
/// The manager confines all side effects to this trait; any blocking I/O,
/// timeout, or retry policy belongs to the implementation.
///
/// # Implementations
///
/// Implementations are provided in separate crates:
/// - `tessera-auth-memory` - in-memory backend
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Persists an access token keyed by its value.
    ///
    /// `auth` associates an authentication context with the token; it is
    /// absent for tokens minted for local users outside any client flow.
    /// Storing a token whose refresh token already backs a live access
    /// token supersedes that earlier token (a refresh token backs at most
    /// one live access token).
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be stored.
    async fn store_access_token(
        &self,
        token: &AccessToken,
        auth: Option<&AuthenticationContext>,
    ) -> AuthResult<()>;

    /// Reads an access token by its value.
    ///
    /// Returns `None` if the value is unknown or the token has expired.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn read_access_token(&self, value: &str) -> AuthResult<Option<AccessToken>>;

    /// Reads the authentication context stored with an access token.
    ///
    /// Returns `None` if the token is unknown or was stored without a
    /// context.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn read_authentication(
        &self,
        token: &AccessToken,
    ) -> AuthResult<Option<AuthenticationContext>>;

    /// Reads the authentication context reachable through a refresh token
    /// value.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn read_authentication_for_refresh_token(
        &self,
        value: &str,
    ) -> AuthResult<Option<AuthenticationContext>>;

    /// Reads a refresh token by its value.
    ///
    /// Returns `None` if no live access token references the value.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn read_refresh_token(&self, value: &str) -> AuthResult<Option<RefreshToken>>;

    /// Removes the access token with the given value.
    ///
    /// Removing an unknown value is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn remove_access_token(&self, value: &str) -> AuthResult<()>;

    /// Removes the refresh token with the given value, leaving the access
    /// token it backed in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn remove_refresh_token(&self, value: &str) -> AuthResult<()>;

    /// Removes the access token(s) minted from the given refresh token
    /// value, together with the refresh token itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn remove_access_token_using_refresh_token(&self, value: &str) -> AuthResult<()>;

    /// Finds live access tokens by client id and user name.
    ///
    /// A `None` position matches any value. Expired tokens are never
    /// returned. An empty result is an empty collection, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn find_tokens_by_client_id_and_user_name(
        &self,
        client_id: Option<&str>,
        user_name: Option<&str>,
    ) -> AuthResult<Vec<AccessToken>>;
}
