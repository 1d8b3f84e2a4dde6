//! `AuthUser` extractor: the identity the auth middleware attached.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use hotels_auth::AuthenticatedIdentity;
use hotels_core::error::AppError;

use crate::error::ApiError;

/// Outward message when a protected route is called anonymously.
pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required";

/// Authenticated caller available in handlers.
///
/// Rejects with 401 when the request carried no bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedIdentity);

impl AuthUser {
    /// Returns the inner identity.
    pub fn identity(&self) -> &AuthenticatedIdentity {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = AuthenticatedIdentity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedIdentity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::authentication(AUTH_REQUIRED_MESSAGE).into())
    }
}
