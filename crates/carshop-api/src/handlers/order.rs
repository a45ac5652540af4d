//! Order handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;

use carshop_core::result::OrNotFound;

use crate::dto::request::OrderRequest;
use crate::dto::response::{OrderResponse, collect};
use crate::error::ApiResult;
use crate::extractors::{ValidJson, parse_id};
use crate::state::AppState;

const ENTITY: &str = "Order";

/// GET /api/orders
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<OrderResponse>>> {
    let orders = state.orders.get_all_orders().await?;
    Ok(Json(collect(orders)))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<OrderResponse>> {
    let id = parse_id(&raw_id, "order")?;
    let order = state
        .orders
        .get_order_by_id(id)
        .await?
        .or_not_found(ENTITY, id)?;
    Ok(Json(order.into()))
}

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<OrderRequest>,
) -> ApiResult<(StatusCode, Json<OrderResponse>)> {
    let order = req.into_order(Utc::now())?;
    let created = state.orders.add_order(&order).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /api/orders/{id}
///
/// An omitted `creationDate` keeps the stored one.
pub async fn update_order(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidJson(req): ValidJson<OrderRequest>,
) -> ApiResult<Json<OrderResponse>> {
    let id = parse_id(&raw_id, "order")?;

    let keep_date = req.creation_date.is_none();
    let order = req.into_order(Utc::now())?;
    let updated = if keep_date {
        state.orders.update_order_keeping_date(id, &order).await?
    } else {
        state.orders.update_order(id, &order).await?
    };
    Ok(Json(updated.or_not_found(ENTITY, id)?.into()))
}

/// DELETE /api/orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id, "order")?;
    let deleted = state.orders.delete_order_by_id(id).await?;
    Ok(deleted.then_some(StatusCode::NO_CONTENT).or_not_found(ENTITY, id)?)
}
