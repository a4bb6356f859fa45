//! Storage traits for authorization data.
//!
//! This module defines the persistence interface the token manager
//! delegates to.
//!
//! # Implementations
//!
//! Storage implementations are provided in separate crates:
//!
//! - `tessera-auth-memory` - in-memory backend for tests and single-node use

pub mod token_store;

pub use token_store::TokenStore;
