//! Shared fixtures for unit tests.

use std::sync::Arc;

use hotels_core::config::AuthConfig;
use hotels_database::memory::MemoryUserStore;

use crate::credentials::CredentialStore;
use crate::jwt::TokenService;
use crate::password::PasswordHasher;

pub(crate) const TEST_SECRET: &str = "unit-test-secret-key-with-32-plus-bytes!";

/// Auth settings with Argon2 costs low enough for fast tests.
pub(crate) fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_SECRET.to_string(),
        jwt_ttl_minutes: 60,
        jwt_leeway_seconds: 0,
        password_hash_memory_kib: 1024,
        password_hash_iterations: 1,
        password_hash_parallelism: 1,
    }
}

pub(crate) fn token_service() -> TokenService {
    TokenService::new(&test_auth_config())
}

pub(crate) fn credential_store() -> (CredentialStore, MemoryUserStore) {
    let users = MemoryUserStore::new();
    let hasher = PasswordHasher::new(&test_auth_config()).unwrap();
    let store = CredentialStore::new(Arc::new(users.clone()), Arc::new(hasher));
    (store, users)
}
