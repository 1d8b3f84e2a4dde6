//! Token issuance and validation behind one handle.

use chrono::{DateTime, Duration, Utc};

use hotels_core::config::AuthConfig;
use hotels_entity::user::UserRole;

use super::claims::Claims;
use super::decoder::JwtDecoder;
use super::encoder::{IssuedToken, JwtEncoder};
use super::error::TokenError;

/// Issues and validates signed bearer tokens.
///
/// Time is always passed in, so expiry behaviour is testable without sleeping.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenService {
    /// Creates the service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
        }
    }

    /// Issues a token for `subject`, valid until `now + ttl`.
    pub fn issue(
        &self,
        subject: &str,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        self.encoder.issue(subject, role, now)
    }

    /// Returns the verified claims of `token` as of `now`.
    pub fn parse_and_verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        self.decoder.parse_and_verify(token, now)
    }

    /// Whether `token` verifies at `now` and names `expected_subject`.
    pub fn is_valid(&self, token: &str, expected_subject: &str, now: DateTime<Utc>) -> bool {
        self.parse_and_verify(token, now)
            .is_ok_and(|claims| claims.subject() == expected_subject)
    }

    /// Configured token lifetime.
    pub fn ttl(&self) -> Duration {
        self.encoder.ttl()
    }
}
