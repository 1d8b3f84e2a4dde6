//! Auth handlers: register and login.
//!
//! Both answer with plain text, which is what the web client expects.

use axum::extract::State;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<String> {
    let role = state
        .auth
        .register(&req.username, &req.password, &req.role)
        .await?;

    Ok(format!("User registered with role: {role}"))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<String> {
    let issued = state.auth.login(&req.username, &req.password).await?;
    Ok(issued.token)
}
