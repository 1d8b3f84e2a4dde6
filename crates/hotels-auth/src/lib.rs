//! # hotels-auth
//!
//! Authentication and authorization for the hotels service.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `jwt`: HS256 token issuance and validation
//! - `credentials`: credential registration and lookup over a [`UserStore`]
//! - `gateway`: per-request bearer token validation and identity resolution
//! - `rbac`: role gates applied by handlers
//! - `service`: register/login orchestration
//!
//! [`UserStore`]: hotels_database::UserStore

pub mod credentials;
pub mod gateway;
pub mod identity;
pub mod jwt;
pub mod password;
pub mod rbac;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use credentials::CredentialStore;
pub use gateway::AuthGateway;
pub use identity::AuthenticatedIdentity;
pub use jwt::{Claims, IssuedToken, TokenError, TokenService};
pub use password::PasswordHasher;
pub use rbac::{require_admin, require_role};
pub use service::AuthService;
