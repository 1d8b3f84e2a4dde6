//! PostgreSQL repository implementations.

pub mod hotel;
pub mod user;

pub use hotel::HotelRepository;
pub use user::UserRepository;
