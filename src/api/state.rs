//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, UserRepository, UserStore};
use crate::services::{AuthService, Authenticator};

/// Collaborators shared by every handler.
///
/// Built once at startup and passed to the router; handlers never reach
/// for global state.
#[derive(Clone)]
pub struct AppState {
    /// Password hashing and access tokens
    pub auth_service: Arc<dyn AuthService>,
    /// User persistence
    pub users: Arc<dyn UserRepository>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the production collaborators on top of an open database.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(database.get_connection()));
        let auth_service = Arc::new(Authenticator::new(users.clone(), config));

        Self::new(auth_service, users, database)
    }

    /// Create application state with manually injected collaborators.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        users: Arc<dyn UserRepository>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            users,
            database,
        }
    }
}
