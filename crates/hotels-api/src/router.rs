//! Route definitions for the hotels HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes, auth on the hotel routes and request logging.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(hotel_routes(state.clone()))
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Public auth endpoints: register, login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

/// Hotel CRUD; every handler requires an authenticated caller.
///
/// Bearer tokens are only checked here, so a stale token sent to the public
/// routes never blocks a fresh login.
fn hotel_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/hotels",
            get(handlers::hotel::list_hotels).post(handlers::hotel::create_hotel),
        )
        .route("/hotels/updateAddress/{id}", put(handlers::hotel::update_address))
        .route("/hotels/delete/{id}", delete(handlers::hotel::delete_hotel))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::authenticate,
        ))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
