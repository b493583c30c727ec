//! Handler for `GET /api/users`.

use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::response::ListResponse;
use crate::state::AppState;
use crate::store::UserSummary;

/// List every registration in insertion order. Password hashes are never
/// included.
pub async fn list_users(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<Vec<UserSummary>>>> {
    let users = state.users.list().await;
    Ok(Json(ListResponse::ok(users)))
}
