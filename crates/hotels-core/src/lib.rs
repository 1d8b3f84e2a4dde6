//! # hotels-core
//!
//! Core crate for the hotels service. Contains configuration schemas,
//! pagination/sorting value types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other hotels crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
