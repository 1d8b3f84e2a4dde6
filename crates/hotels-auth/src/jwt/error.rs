//! Token verification failures.

use thiserror::Error;

use hotels_core::error::AppError;

/// Outward message for every rejected token; the precise reason is only logged.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

/// Why a token was not accepted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Not three base64url segments, bad JSON, missing claims, or wrong algorithm.
    #[error("malformed token")]
    Malformed,
    /// The signature does not match the header and payload.
    #[error("invalid token signature")]
    InvalidSignature,
    /// The token's expiry is not in the future.
    #[error("token has expired")]
    Expired,
    /// The server could not sign a token.
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(reason) => {
                AppError::internal(format!("Failed to sign token: {reason}"))
            }
            _ => AppError::authentication(INVALID_TOKEN_MESSAGE),
        }
    }
}
