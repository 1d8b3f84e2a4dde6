//! Signed bearer tokens: claims, issuance, and validation.
//!
//! Tokens are stateless. Any process holding the same secret validates any
//! token on its own, and nothing can revoke a token before it expires.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod service;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder};
pub use error::TokenError;
pub use service::TokenService;
