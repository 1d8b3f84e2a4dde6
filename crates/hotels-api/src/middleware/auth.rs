//! Bearer token authentication middleware.
//!
//! Layered on the protected routes only. A request without a bearer token
//! passes through anonymously and handlers reject it via the `AuthUser`
//! extractor. A request with a bad token is rejected here.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use crate::error::ApiError;
use crate::state::AppState;

/// Validates the bearer token and attaches the caller's identity.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let identity = state.gateway.authenticate(header, Utc::now()).await?;
    if let Some(identity) = identity {
        request.extensions_mut().insert(identity);
    }

    Ok(next.run(request).await)
}
