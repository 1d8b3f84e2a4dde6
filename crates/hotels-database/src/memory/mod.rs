//! In-memory store implementations.
//!
//! Suitable for tests and single-process development runs only.

pub mod hotel;
pub mod user;

pub use hotel::MemoryHotelStore;
pub use user::MemoryUserStore;
