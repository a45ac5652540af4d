//! Application builder: wires repositories, services, router and
//! middleware into an Axum app.

use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use carshop_core::config::{AuditConfig, ServerConfig};
use carshop_core::traits::AuditSink;
use carshop_database::DatabasePool;
use carshop_database::repositories::{
    AuditLogRepository, CarRepository, ClientRepository, OrderRepository, UserRepository,
};
use carshop_entity::audit::NewAuditLogEntry;
use carshop_service::{AuditService, Auditor, CarService, ClientService, OrderService, UserService};

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Build the PostgreSQL-backed application state.
pub fn build_state(db: &DatabasePool, audit: &AuditConfig) -> AppState {
    let pool = db.pool().clone();

    let audit_repo = Arc::new(AuditLogRepository::new(pool.clone()));
    let auditor = if audit.enabled {
        Auditor::new(Arc::clone(&audit_repo) as Arc<dyn AuditSink<NewAuditLogEntry>>)
    } else {
        info!("Audit trail disabled");
        Auditor::disabled()
    };

    AppState {
        cars: CarService::new(Arc::new(CarRepository::new(pool.clone())), auditor.clone()),
        clients: ClientService::new(
            Arc::new(ClientRepository::new(pool.clone())),
            auditor.clone(),
        ),
        orders: OrderService::new(Arc::new(OrderRepository::new(pool.clone())), auditor.clone()),
        users: UserService::new(Arc::new(UserRepository::new(pool)), auditor),
        audit: AuditService::new(audit_repo),
        database: Some(db.clone()),
    }
}

/// Build the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, server: &ServerConfig) -> Router {
    build_router(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(build_cors_layer(&server.cors))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(request_logging))
}
