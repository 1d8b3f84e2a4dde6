//! Credential registration and lookup over a [`UserStore`].

use std::sync::Arc;

use tracing::{info, warn};

use hotels_core::error::{AppError, ErrorKind};
use hotels_core::result::AppResult;
use hotels_database::UserStore;
use hotels_entity::user::{CreateUser, User, UserRole};

use crate::password::PasswordHasher;

/// Registers users and resolves them by name.
///
/// Uniqueness is the store's job: `insert` is an atomic insert-if-absent,
/// so there is no check-then-insert window here.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
}

impl CredentialStore {
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Hashes `raw_password` and persists a new user.
    ///
    /// Fails with `Conflict` if the username is taken; the store is left
    /// unchanged in that case.
    pub async fn register(
        &self,
        username: &str,
        raw_password: &str,
        role: UserRole,
    ) -> AppResult<User> {
        let password_hash = self.hasher.hash_password(raw_password)?;

        let user = self
            .users
            .insert(CreateUser {
                username: username.to_string(),
                password_hash,
                role,
            })
            .await
            .inspect_err(|e| {
                if e.is(ErrorKind::Conflict) {
                    warn!(username = %username, "Registration rejected: username taken");
                }
            })?;

        info!(username = %user.username, role = %user.role, "User registered");
        Ok(user)
    }

    /// Returns the user, or `NotFound`.
    pub async fn find_by_username(&self, username: &str) -> AppResult<User> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))
    }

    pub(crate) fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }
}
