//! The caller a request was authenticated as.

use serde::Serialize;

use hotels_entity::user::UserRole;

/// Identity attached to a request after its bearer token checked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedIdentity {
    /// Username from the token subject.
    pub username: String,
    /// Role as currently stored for that user.
    pub role: UserRole,
}

impl AuthenticatedIdentity {
    pub fn new(username: impl Into<String>, role: UserRole) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }
}
