//! Hotel handlers: create, list, update address, delete.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

use hotels_auth::rbac::require_admin;
use hotels_core::types::PageResponse;
use hotels_entity::hotel::Hotel;

use crate::dto::request::{AddressRequest, HotelRequest, ListHotelsParams};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, IdPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// POST /api/hotels
pub async fn create_hotel(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<HotelRequest>,
) -> ApiResult<Json<Hotel>> {
    let hotel = state.stores.hotels.insert(req.into_create()).await?;
    info!(hotel_id = hotel.id, username = %auth.username, "Hotel created");
    Ok(Json(hotel))
}

/// GET /api/hotels
pub async fn list_hotels(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedQuery(params): ValidatedQuery<ListHotelsParams>,
) -> ApiResult<Json<PageResponse<Hotel>>> {
    let query = params.into_query()?;
    let page = state.stores.hotels.find_page(&query).await?;
    Ok(Json(page))
}

/// PUT /api/hotels/updateAddress/{id}
pub async fn update_address(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<AddressRequest>,
) -> ApiResult<Json<Hotel>> {
    let hotel = state.stores.hotels.update_address(id, req.into()).await?;
    info!(hotel_id = id, username = %auth.username, "Hotel address updated");
    Ok(Json(hotel))
}

/// DELETE /api/hotels/delete/{id}
///
/// ADMIN only.
pub async fn delete_hotel(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<StatusCode> {
    require_admin(auth.identity())?;
    state.stores.hotels.delete(id).await?;
    info!(hotel_id = id, username = %auth.username, "Hotel deleted");
    Ok(StatusCode::NO_CONTENT)
}
