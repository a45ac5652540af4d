//! User handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use carshop_core::result::OrNotFound;
use carshop_entity::user::UserSearchCriteria;

use crate::dto::request::{UserRequest, UserSearchQuery};
use crate::dto::response::{UserResponse, collect};
use crate::error::ApiResult;
use crate::extractors::{SearchQuery, ValidJson, parse_id};
use crate::state::AppState;

const ENTITY: &str = "User";

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.users.get_all_users().await?;
    Ok(Json(collect(users)))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let id = parse_id(&raw_id, "user")?;
    let user = state
        .users
        .get_user_by_id(id)
        .await?
        .or_not_found(ENTITY, id)?;
    Ok(Json(user.into()))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<UserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = req.into_user()?;
    let created = state.users.add_user(&user).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidJson(req): ValidJson<UserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let id = parse_id(&raw_id, "user")?;
    let user = req.into_user()?;
    let updated = state
        .users
        .update_user(id, &user)
        .await?
        .or_not_found(ENTITY, id)?;
    Ok(Json(updated.into()))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id, "user")?;
    let deleted = state.users.delete_user_by_id(id).await?;
    Ok(deleted.then_some(StatusCode::NO_CONTENT).or_not_found(ENTITY, id)?)
}

/// GET /api/users/search?username=&role=
pub async fn search_users(
    State(state): State<AppState>,
    SearchQuery(query): SearchQuery<UserSearchQuery>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let criteria = UserSearchCriteria::from(query);
    let users = state.users.search_users(&criteria).await?;
    Ok(Json(collect(users)))
}
