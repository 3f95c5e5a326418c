use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{UserDetail, UserList, UserSummary},
};

#[utoipa::path(get, path = "/api/users", responses((status = 200, body = UserList)))]
pub async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<UserList>> {
    let users = state.user_service.get_users()?;
    Ok(Json(UserList {
        users: users.into_iter().map(UserSummary::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses((status = 200, body = UserDetail), (status = 404, body = ErrorBody))
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<UserDetail>> {
    // A non-integer id cannot name a user.
    let Path(id) = id.map_err(|e| ApiError::NotFound(e.body_text()))?;
    let user = state.user_service.get_user(id)?;
    Ok(Json(UserDetail::from(user)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
}
