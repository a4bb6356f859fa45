//! In-memory storage backend for Tessera Auth
//!
//! Provides a [`TokenStore`](tessera_auth::TokenStore) implementation backed
//! by process memory. Suitable for tests and single-node deployments; tokens
//! do not survive a restart.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tessera_auth::TokenManager;
//! use tessera_auth_memory::InMemoryTokenStore;
//!
//! let store = Arc::new(InMemoryTokenStore::new());
//! let manager = TokenManager::new(store);
//! ```

pub mod store;

pub use store::InMemoryTokenStore;
