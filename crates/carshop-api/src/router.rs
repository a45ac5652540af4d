//! Route definitions for the CarShop HTTP API.
//!
//! All routes are mounted under `/api`. Static segments such as
//! `/cars/search` take precedence over `/cars/{id}`.

use axum::Router;
use axum::routing::get;

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route, threading `AppState` through.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(car_routes())
        .merge(client_routes())
        .merge(order_routes())
        .merge(user_routes())
        .merge(audit_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

fn car_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cars",
            get(handlers::car::list_cars).post(handlers::car::create_car),
        )
        .route("/cars/search", get(handlers::car::search_cars))
        .route(
            "/cars/{id}",
            get(handlers::car::get_car)
                .put(handlers::car::update_car)
                .delete(handlers::car::delete_car),
        )
}

fn client_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clients",
            get(handlers::client::list_clients).post(handlers::client::create_client),
        )
        .route(
            "/clients/{id}",
            get(handlers::client::get_client)
                .put(handlers::client::update_client)
                .delete(handlers::client::delete_client),
        )
}

fn order_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/orders",
            get(handlers::order::list_orders).post(handlers::order::create_order),
        )
        .route(
            "/orders/{id}",
            get(handlers::order::get_order)
                .put(handlers::order::update_order)
                .delete(handlers::order::delete_order),
        )
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route("/users/search", get(handlers::user::search_users))
        .route(
            "/users/{id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
}

/// Read-only audit trail.
fn audit_routes() -> Router<AppState> {
    Router::new().route("/audit", get(handlers::audit::recent_entries))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
