//! # carshop-api
//!
//! HTTP API layer for CarShop built on Axum.
//!
//! Provides the REST endpoints for cars, clients, orders and users, the
//! read-only audit and health endpoints, validation extractors, DTOs, error
//! mapping and middleware (CORS, request logging).

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use error::{ApiError, ApiErrorResponse};
pub use state::AppState;
