//! # hotels-api
//!
//! HTTP API layer for the hotels service built on Axum.
//!
//! Provides the auth and hotel endpoints, bearer-token middleware, request
//! extractors, DTOs, and the mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
