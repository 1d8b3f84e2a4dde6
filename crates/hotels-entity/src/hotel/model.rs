//! Hotel entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::address::Address;

/// A hotel record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Hotel {
    /// Store-assigned identifier.
    pub id: i64,
    /// Hotel name.
    pub name: String,
    /// Star category, 1 to 5.
    pub category: i32,
    /// Address columns, flattened in the table.
    #[sqlx(flatten)]
    pub address: Address,
}

/// Data required to create a new hotel.
#[derive(Debug, Clone)]
pub struct CreateHotel {
    /// Hotel name.
    pub name: String,
    /// Star category.
    pub category: i32,
    /// Address.
    pub address: Address,
}

impl CreateHotel {
    /// Materializes the hotel once the store has assigned an id.
    pub fn into_hotel(self, id: i64) -> Hotel {
        Hotel {
            id,
            name: self.name,
            category: self.category,
            address: self.address,
        }
    }
}
