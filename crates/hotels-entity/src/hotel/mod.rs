//! Hotel domain entities.

pub mod address;
pub mod model;
pub mod query;

pub use address::Address;
pub use model::{CreateHotel, Hotel};
pub use query::{HotelQuery, HotelSortKey};
