//! HTTP-level tests driving the full router over the in-memory store.

mod auth_test;
mod helpers;
mod hotel_test;
