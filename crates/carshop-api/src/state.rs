//! Application state shared across all handlers.

use carshop_database::DatabasePool;
use carshop_service::{AuditService, CarService, ClientService, OrderService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Services hold their
/// stores behind `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Car stock.
    pub cars: CarService,
    /// Clients.
    pub clients: ClientService,
    /// Orders.
    pub orders: OrderService,
    /// User accounts.
    pub users: UserService,
    /// Read access to the audit trail.
    pub audit: AuditService,
    /// Pool used by the health check; `None` when the services do not sit
    /// on PostgreSQL.
    pub database: Option<DatabasePool>,
}
