//! Per-request bearer token validation and identity resolution.
//!
//! A request moves through these steps:
//! 1. no `Authorization: Bearer` header: anonymous, handlers decide
//! 2. token present: verify signature, claims and expiry
//! 3. resolve the subject against the credential store for its current role
//! 4. authenticated: the identity is attached to the request
//!
//! Every rejection in steps 2 and 3 is the same outward 401.

use chrono::{DateTime, Utc};
use tracing::debug;

use hotels_core::error::{AppError, ErrorKind};
use hotels_core::result::AppResult;

use crate::credentials::CredentialStore;
use crate::identity::AuthenticatedIdentity;
use crate::jwt::TokenService;
use crate::jwt::error::INVALID_TOKEN_MESSAGE;

const BEARER_PREFIX: &str = "Bearer ";

/// Turns an `Authorization` header into an optional identity.
#[derive(Debug, Clone)]
pub struct AuthGateway {
    tokens: TokenService,
    credentials: CredentialStore,
}

impl AuthGateway {
    pub fn new(tokens: TokenService, credentials: CredentialStore) -> Self {
        Self {
            tokens,
            credentials,
        }
    }

    /// Extracts the token from an `Authorization` header value.
    ///
    /// Anything other than a non-empty `Bearer <token>` counts as no token.
    pub fn bearer_token(header: Option<&str>) -> Option<&str> {
        header
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Authenticates a request as of `now`.
    ///
    /// `Ok(None)` means anonymous. A token that is present but invalid, or
    /// whose subject no longer exists, is an `Authentication` error.
    pub async fn authenticate(
        &self,
        header: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<Option<AuthenticatedIdentity>> {
        let Some(token) = Self::bearer_token(header) else {
            return Ok(None);
        };

        let claims = self.tokens.parse_and_verify(token, now).map_err(|e| {
            debug!(reason = %e, "Bearer token rejected");
            AppError::from(e)
        })?;

        let user = match self.credentials.find_by_username(claims.subject()).await {
            Ok(user) => user,
            Err(e) if e.is(ErrorKind::NotFound) => {
                debug!(username = %claims.sub, "Bearer token subject no longer exists");
                return Err(AppError::authentication(INVALID_TOKEN_MESSAGE));
            }
            Err(e) => return Err(e),
        };

        Ok(Some(AuthenticatedIdentity::new(user.username, user.role)))
    }
}
