//! Role checks for authenticated callers.

use tracing::warn;

use hotels_core::error::AppError;
use hotels_entity::user::UserRole;

use crate::identity::AuthenticatedIdentity;

/// Outward message when the caller's role is insufficient.
pub const FORBIDDEN_MESSAGE: &str = "Access denied";

/// Whether `actual` satisfies `required`. ADMIN satisfies every requirement.
pub fn role_satisfies(actual: UserRole, required: UserRole) -> bool {
    match required {
        UserRole::Admin => actual.is_admin(),
        UserRole::User => true,
    }
}

/// Fails with `Authorization` unless `identity` holds `required`.
pub fn require_role(identity: &AuthenticatedIdentity, required: UserRole) -> Result<(), AppError> {
    if role_satisfies(identity.role, required) {
        return Ok(());
    }

    warn!(
        username = %identity.username,
        role = %identity.role,
        required = %required,
        "Role check failed"
    );
    Err(AppError::authorization(FORBIDDEN_MESSAGE))
}

/// Shorthand for `require_role(identity, UserRole::Admin)`.
pub fn require_admin(identity: &AuthenticatedIdentity) -> Result<(), AppError> {
    require_role(identity, UserRole::Admin)
}
