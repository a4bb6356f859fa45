//! In-memory token store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use tessera_auth::AuthResult;
use tessera_auth::storage::TokenStore;
use tessera_auth::types::{AccessToken, AuthenticationContext, RefreshToken};

/// In-memory [`TokenStore`] backend.
///
/// All maps live behind a single `RwLock`, so every mutation is applied
/// under one write guard and concurrent `store`/`remove` on the same token
/// value are linearizable.
///
/// Expiration is interpreted here: read and find operations never return
/// expired access tokens. Expired entries are physically deleted by
/// [`cleanup_expired`](InMemoryTokenStore::cleanup_expired).
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    /// Access tokens keyed by token value.
    access_tokens: HashMap<String, AccessToken>,
    /// Authentication contexts keyed by access token value.
    authentications: HashMap<String, AuthenticationContext>,
    /// Refresh token value -> value of the access token minted from it.
    refresh_index: HashMap<String, String>,
}

impl StoreInner {
    /// Removes a token together with its context and refresh association.
    fn purge_access_token(&mut self, value: &str) {
        if let Some(token) = self.access_tokens.remove(value) {
            self.authentications.remove(value);
            if let Some(refresh) = token.refresh_token {
                if self.refresh_index.get(&refresh.value).map(String::as_str) == Some(value) {
                    self.refresh_index.remove(&refresh.value);
                }
            }
        }
    }
}

impl InMemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deletes expired access tokens and their contexts.
    ///
    /// Returns the number of tokens deleted. Reads already filter expired
    /// tokens; this sweep reclaims the memory they occupy.
    pub async fn cleanup_expired(&self) -> u64 {
        let mut inner = self.inner.write().await;
        let expired: Vec<String> = inner
            .access_tokens
            .values()
            .filter(|t| t.is_expired())
            .map(|t| t.value.clone())
            .collect();

        for value in &expired {
            inner.purge_access_token(value);
        }

        if !expired.is_empty() {
            tracing::debug!(count = expired.len(), "swept expired access tokens");
        }
        expired.len() as u64
    }

    /// Number of access tokens currently held, expired entries included.
    pub async fn len(&self) -> usize {
        self.inner.read().await.access_tokens.len()
    }

    /// Returns `true` if the store holds no access tokens.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn store_access_token(
        &self,
        token: &AccessToken,
        auth: Option<&AuthenticationContext>,
    ) -> AuthResult<()> {
        let mut inner = self.inner.write().await;

        // A refresh token backs at most one live access token: storing a
        // successor supersedes the predecessor.
        if let Some(ref refresh) = token.refresh_token {
            if let Some(previous) = inner.refresh_index.get(&refresh.value).cloned() {
                if previous != token.value {
                    inner.purge_access_token(&previous);
                }
            }
            inner
                .refresh_index
                .insert(refresh.value.clone(), token.value.clone());
        }

        match auth {
            Some(context) => {
                inner
                    .authentications
                    .insert(token.value.clone(), context.clone());
            }
            None => {
                inner.authentications.remove(&token.value);
            }
        }
        inner
            .access_tokens
            .insert(token.value.clone(), token.clone());
        Ok(())
    }

    async fn read_access_token(&self, value: &str) -> AuthResult<Option<AccessToken>> {
        let inner = self.inner.read().await;
        Ok(inner
            .access_tokens
            .get(value)
            .filter(|t| !t.is_expired())
            .cloned())
    }

    async fn read_authentication(
        &self,
        token: &AccessToken,
    ) -> AuthResult<Option<AuthenticationContext>> {
        let inner = self.inner.read().await;
        Ok(inner.authentications.get(&token.value).cloned())
    }

    async fn read_authentication_for_refresh_token(
        &self,
        value: &str,
    ) -> AuthResult<Option<AuthenticationContext>> {
        let inner = self.inner.read().await;
        Ok(inner
            .refresh_index
            .get(value)
            .and_then(|access_value| inner.authentications.get(access_value))
            .cloned())
    }

    async fn read_refresh_token(&self, value: &str) -> AuthResult<Option<RefreshToken>> {
        let inner = self.inner.read().await;
        Ok(inner
            .refresh_index
            .get(value)
            .and_then(|access_value| inner.access_tokens.get(access_value))
            .filter(|t| !t.is_expired())
            .and_then(|t| t.refresh_token.clone()))
    }

    async fn remove_access_token(&self, value: &str) -> AuthResult<()> {
        let mut inner = self.inner.write().await;
        inner.purge_access_token(value);
        Ok(())
    }

    async fn remove_refresh_token(&self, value: &str) -> AuthResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(access_value) = inner.refresh_index.remove(value) {
            // Detach only; the access token stays live.
            if let Some(token) = inner.access_tokens.get_mut(&access_value) {
                token.refresh_token = None;
            }
        }
        Ok(())
    }

    async fn remove_access_token_using_refresh_token(&self, value: &str) -> AuthResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(access_value) = inner.refresh_index.remove(value) {
            inner.access_tokens.remove(&access_value);
            inner.authentications.remove(&access_value);
        }
        Ok(())
    }

    async fn find_tokens_by_client_id_and_user_name(
        &self,
        client_id: Option<&str>,
        user_name: Option<&str>,
    ) -> AuthResult<Vec<AccessToken>> {
        let inner = self.inner.read().await;
        Ok(inner
            .access_tokens
            .values()
            .filter(|t| !t.is_expired())
            .filter(|t| client_id.is_none_or(|c| t.client_id == c))
            .filter(|t| user_name.is_none_or(|u| t.local_user == u))
            .cloned()
            .collect())
    }
}
