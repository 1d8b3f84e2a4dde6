//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use hotels_auth::{AuthGateway, AuthService, CredentialStore, PasswordHasher, TokenService};
use hotels_core::config::AppConfig;
use hotels_core::result::AppResult;
use hotels_database::Stores;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// User and hotel stores
    pub stores: Stores,
    /// Register/login orchestration
    pub auth: Arc<AuthService>,
    /// Bearer token validation for incoming requests
    pub gateway: Arc<AuthGateway>,
}

impl AppState {
    /// Wires the auth components over the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> AppResult<Self> {
        let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let tokens = TokenService::new(&config.auth);
        let credentials = CredentialStore::new(Arc::clone(&stores.users), hasher);

        let auth = AuthService::new(credentials.clone(), tokens.clone())?;
        let gateway = AuthGateway::new(tokens, credentials);

        Ok(Self {
            config: Arc::new(config),
            stores,
            auth: Arc::new(auth),
            gateway: Arc::new(gateway),
        })
    }
}
