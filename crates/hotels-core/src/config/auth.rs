//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Minimum HMAC-SHA256 key length in bytes.
pub const MIN_JWT_SECRET_BYTES: usize = 32;

/// Token signing and password hashing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: String,
    /// Token TTL in minutes.
    #[serde(default = "default_ttl")]
    pub jwt_ttl_minutes: u64,
    /// Clock-skew tolerance applied to the expiry check.
    #[serde(default)]
    pub jwt_leeway_seconds: u64,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub password_hash_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_iterations")]
    pub password_hash_iterations: u32,
    /// Argon2 lanes.
    #[serde(default = "default_parallelism")]
    pub password_hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            jwt_ttl_minutes: default_ttl(),
            jwt_leeway_seconds: 0,
            password_hash_memory_kib: default_memory_kib(),
            password_hash_iterations: default_iterations(),
            password_hash_parallelism: default_parallelism(),
        }
    }
}

fn default_ttl() -> u64 {
    60
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
