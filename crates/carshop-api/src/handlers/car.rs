//! Car handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use carshop_core::result::OrNotFound;
use carshop_entity::car::CarSearchCriteria;

use crate::dto::request::{CarRequest, CarSearchQuery};
use crate::dto::response::{CarResponse, collect};
use crate::error::ApiResult;
use crate::extractors::{SearchQuery, ValidJson, parse_id};
use crate::state::AppState;

const ENTITY: &str = "Car";

/// GET /api/cars
pub async fn list_cars(State(state): State<AppState>) -> ApiResult<Json<Vec<CarResponse>>> {
    let cars = state.cars.get_all_cars().await?;
    Ok(Json(collect(cars)))
}

/// GET /api/cars/{id}
pub async fn get_car(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<CarResponse>> {
    let id = parse_id(&raw_id, "car")?;
    let car = state.cars.get_car_by_id(id).await?.or_not_found(ENTITY, id)?;
    Ok(Json(car.into()))
}

/// POST /api/cars
pub async fn create_car(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CarRequest>,
) -> ApiResult<(StatusCode, Json<CarResponse>)> {
    let car = req.into_car()?;
    let created = state.cars.add_car(&car).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /api/cars/{id}
pub async fn update_car(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidJson(req): ValidJson<CarRequest>,
) -> ApiResult<Json<CarResponse>> {
    let id = parse_id(&raw_id, "car")?;
    let car = req.into_car()?;
    let updated = state
        .cars
        .update_car(id, &car)
        .await?
        .or_not_found(ENTITY, id)?;
    Ok(Json(updated.into()))
}

/// DELETE /api/cars/{id}
pub async fn delete_car(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id, "car")?;
    let deleted = state.cars.delete_car_by_id(id).await?;
    Ok(deleted.then_some(StatusCode::NO_CONTENT).or_not_found(ENTITY, id)?)
}

/// GET /api/cars/search?make=&model=&year=&price=&condition=
pub async fn search_cars(
    State(state): State<AppState>,
    SearchQuery(query): SearchQuery<CarSearchQuery>,
) -> ApiResult<Json<Vec<CarResponse>>> {
    let criteria = CarSearchCriteria::from(query);
    let cars = state.cars.search_cars(&criteria).await?;
    Ok(Json(collect(cars)))
}
