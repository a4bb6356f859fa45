//! # tessera-auth
//!
//! Authorization token management for the Tessera CMS server.
//!
//! This crate provides:
//! - Access token issuance for local principals and OAuth 2.0 client flows
//! - Token validation lookups and revocation, including the
//!   refresh-token cascade
//! - A storage contract ([`TokenStore`]) that backends implement
//!
//! ## Overview
//!
//! The [`TokenManager`] is a stateless orchestration layer: it mints opaque
//! tokens and delegates every persistence concern to an injected
//! [`TokenStore`]. Swap in `tessera-auth-memory` for tests and single-node
//! deployments, or a durable backend for production.
//!
//! ## Modules
//!
//! - [`token`] - Token issuance, lookup, and revocation
//! - [`storage`] - Storage traits for authorization data
//! - [`types`] - Token and authentication domain types
//! - [`error`] - Error types

pub mod error;
pub mod storage;
pub mod token;
pub mod types;

pub use error::AuthError;
pub use storage::TokenStore;
pub use token::{TokenConfig, TokenManager};
pub use types::{
    AccessToken, AuthenticationContext, GrantType, LOCAL_USER, RefreshToken, TokenProvenance,
};

/// Type alias for authorization results.
pub type AuthResult<T> = Result<T, AuthError>;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use tessera_auth::prelude::*;
/// ```
pub mod prelude {
    pub use crate::AuthResult;
    pub use crate::error::AuthError;
    pub use crate::storage::TokenStore;
    pub use crate::token::{TokenConfig, TokenManager};
    pub use crate::types::{
        AccessToken, AuthenticationContext, GrantType, LOCAL_USER, RefreshToken, TokenProvenance,
    };
}
