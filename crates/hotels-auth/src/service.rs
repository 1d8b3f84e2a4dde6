//! Register and login orchestration.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use hotels_core::error::{AppError, ErrorKind};
use hotels_core::result::AppResult;
use hotels_entity::user::UserRole;

use crate::credentials::CredentialStore;
use crate::jwt::{IssuedToken, TokenService};

/// The only message a failed login ever produces.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password";

/// Registers accounts and exchanges credentials for tokens.
#[derive(Debug, Clone)]
pub struct AuthService {
    credentials: CredentialStore,
    tokens: TokenService,
    /// Hash verified when the user does not exist, so both failure paths
    /// pay for one Argon2 verification.
    dummy_hash: String,
}

impl AuthService {
    pub fn new(credentials: CredentialStore, tokens: TokenService) -> AppResult<Self> {
        let dummy_hash = credentials
            .hasher()
            .hash_password("hotels-login-timing-placeholder")?;
        Ok(Self {
            credentials,
            tokens,
            dummy_hash,
        })
    }

    /// Registers a user and returns the role that was assigned.
    ///
    /// `role` must be exactly `ADMIN` or `USER`; anything else is a
    /// `Validation` error and nothing is stored.
    pub async fn register(&self, username: &str, password: &str, role: &str) -> AppResult<UserRole> {
        let role = UserRole::from_str(role)?;
        let user = self.credentials.register(username, password, role).await?;
        Ok(user.role)
    }

    /// Exchanges credentials for a token issued now.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<IssuedToken> {
        self.login_at(username, password, Utc::now()).await
    }

    /// Exchanges credentials for a token issued at `now`.
    ///
    /// An unknown username and a wrong password fail identically.
    pub async fn login_at(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> AppResult<IssuedToken> {
        let hasher = self.credentials.hasher();

        let user = match self.credentials.find_by_username(username).await {
            Ok(user) => user,
            Err(e) if e.is(ErrorKind::NotFound) => {
                hasher.verify_password(password, &self.dummy_hash);
                warn!(username = %username, "Login failed");
                return Err(AppError::authentication(LOGIN_FAILED_MESSAGE));
            }
            Err(e) => return Err(e),
        };

        if !hasher.verify_password(password, &user.password_hash) {
            warn!(username = %username, "Login failed");
            return Err(AppError::authentication(LOGIN_FAILED_MESSAGE));
        }

        let issued = self.tokens.issue(&user.username, user.role, now)?;
        info!(username = %user.username, role = %user.role, "User logged in");
        Ok(issued)
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}
