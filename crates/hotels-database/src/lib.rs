//! # hotels-database
//!
//! The data-store boundary of the hotels service: the [`UserStore`] and
//! [`HotelStore`] traits, their PostgreSQL repositories, in-memory
//! implementations, and connection/migration management.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{HotelStore, Stores, UserStore};
