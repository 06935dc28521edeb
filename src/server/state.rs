//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Credential chain used to verify bearer credentials
//! - Token service used to issue access tokens
//! - Immutable configuration loaded at startup

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config,
    service::auth::{credential::CredentialChain, token::TokenService},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool handle and
/// the rest are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Ordered verifiers for `Authorization: Bearer` credentials.
    pub credentials: Arc<CredentialChain>,

    /// Signs access tokens returned by the auth endpoints.
    pub tokens: Arc<TokenService>,

    pub config: Arc<Config>,
}

impl AppState {
    /// Creates the application state, building the token service and credential chain
    /// from `config`.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Configuration loaded at startup
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let tokens = Arc::new(TokenService::from_config(&config));
        let credentials = Arc::new(CredentialChain::from_config(&config, tokens.clone()));

        Self {
            db,
            credentials,
            tokens,
            config: Arc::new(config),
        }
    }
}
