//! # hotels-entity
//!
//! Domain entity models for the hotels service. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities additionally derive `sqlx::FromRow`.

pub mod hotel;
pub mod user;
