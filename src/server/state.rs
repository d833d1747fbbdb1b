//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - The persistence store selected by configuration
//! - Token validator and issuer sharing the configured signing key
//! - Password encrypter for personnel accounts

use std::sync::Arc;

use crate::server::{
    auth::{encrypter::Encrypter, issuer::TokenIssuer, validator::CredentialValidator},
    config::JwtConfig,
    data::store::Store,
    error::config::ConfigError,
};

/// Application state containing shared resources and dependencies.
///
/// Every field is read-only after boot and cheap to clone: the store clones a
/// connection pool handle or an `Arc`, the rest are `Arc`s. Services and
/// repositories are built per request from borrowed fields.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend, relational or in-memory.
    pub store: Store,

    /// Validates bearer tokens on protected routes.
    pub validator: Arc<CredentialValidator>,

    /// Signs tokens on login.
    pub issuer: Arc<TokenIssuer>,

    /// Hashes and verifies personnel passwords.
    pub encrypter: Arc<Encrypter>,
}

impl AppState {
    pub fn new(
        store: Store,
        validator: Arc<CredentialValidator>,
        issuer: Arc<TokenIssuer>,
        encrypter: Arc<Encrypter>,
    ) -> Self {
        Self {
            store,
            validator,
            issuer,
            encrypter,
        }
    }

    /// Builds the state with a validator and issuer for `jwt`.
    ///
    /// # Returns
    /// - `Ok(AppState)` - State ready to be handed to the router
    /// - `Err(ConfigError::InvalidValue)` - Signing key too short
    pub fn from_config(
        store: Store,
        jwt: &JwtConfig,
        encrypter: Encrypter,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(
            store,
            Arc::new(CredentialValidator::new(jwt)?),
            Arc::new(TokenIssuer::new(jwt)?),
            Arc::new(encrypter),
        ))
    }
}
