//! Postal address embedded in each hotel row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A denormalized hotel address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street and number.
    pub street: String,
    /// City name; the list endpoint filters on it.
    pub city: String,
    /// Country name.
    pub country: String,
    /// Postal code.
    pub zip_code: String,
}
