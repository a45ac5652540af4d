//! Client handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use carshop_core::result::OrNotFound;

use crate::dto::request::ClientRequest;
use crate::dto::response::{ClientResponse, collect};
use crate::error::ApiResult;
use crate::extractors::{ValidJson, parse_id};
use crate::state::AppState;

const ENTITY: &str = "Client";

/// GET /api/clients
pub async fn list_clients(State(state): State<AppState>) -> ApiResult<Json<Vec<ClientResponse>>> {
    let clients = state.clients.get_all_clients().await?;
    Ok(Json(collect(clients)))
}

/// GET /api/clients/{id}
pub async fn get_client(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<ClientResponse>> {
    let id = parse_id(&raw_id, "client")?;
    let client = state
        .clients
        .get_client_by_id(id)
        .await?
        .or_not_found(ENTITY, id)?;
    Ok(Json(client.into()))
}

/// POST /api/clients
pub async fn create_client(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ClientRequest>,
) -> ApiResult<(StatusCode, Json<ClientResponse>)> {
    let created = state.clients.add_client(&req.into_client()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /api/clients/{id}
pub async fn update_client(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidJson(req): ValidJson<ClientRequest>,
) -> ApiResult<Json<ClientResponse>> {
    let id = parse_id(&raw_id, "client")?;
    let updated = state
        .clients
        .update_client(id, &req.into_client())
        .await?
        .or_not_found(ENTITY, id)?;
    Ok(Json(updated.into()))
}

/// DELETE /api/clients/{id}
pub async fn delete_client(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id, "client")?;
    let deleted = state.clients.delete_client_by_id(id).await?;
    Ok(deleted.then_some(StatusCode::NO_CONTENT).or_not_found(ENTITY, id)?)
}
