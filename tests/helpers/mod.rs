//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use carshop_api::AppState;
use carshop_core::config::{AuditConfig, ServerConfig};
use carshop_database::DatabasePool;
use carshop_service::testing::{MemoryAuditLog, MemoryServices};

/// Environment variable naming the database used by the PostgreSQL tests.
pub const TEST_DATABASE_URL: &str = "CARSHOP_TEST_DATABASE_URL";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Audit log behind the in-memory services, if any
    pub audit_log: Option<Arc<MemoryAuditLog>>,
    /// Database pool for direct queries, if the app runs on PostgreSQL
    pub db: Option<DatabasePool>,
}

impl TestApp {
    /// Build the app on in-memory stores.
    pub fn in_memory() -> Self {
        let services = MemoryServices::new();
        let audit_log = Arc::clone(&services.audit_log);

        let state = AppState {
            cars: services.cars,
            clients: services.clients,
            orders: services.orders,
            users: services.users,
            audit: services.audit,
            database: None,
        };

        Self {
            router: carshop_api::build_app(state, &ServerConfig::default()),
            audit_log: Some(audit_log),
            db: None,
        }
    }

    /// Build the app on PostgreSQL, or `None` when no test database is set.
    pub async fn postgres() -> Option<Self> {
        let url = std::env::var(TEST_DATABASE_URL).ok()?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .expect("Failed to connect to test database");
        let db = DatabasePool::from_pool(pool);

        carshop_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let state = carshop_api::build_state(&db, &AuditConfig::default());

        Some(Self {
            router: carshop_api::build_app(state, &ServerConfig::default()),
            audit_log: None,
            db: Some(db),
        })
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str).await
    }

    /// Make a request with an arbitrary body, sent as `application/json`
    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// POST a body and return the id of the created resource.
    pub async fn create(&self, path: &str, body: Value) -> i64 {
        let response = self.request("POST", path, Some(body)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );
        response.body["id"].as_i64().expect("No id in response")
    }

    /// Create a car and return its id.
    pub async fn create_car(&self, make: &str, model: &str) -> i64 {
        self.create(
            "/api/cars",
            serde_json::json!({
                "id": 1,
                "make": make,
                "model": model,
                "year": 2020,
                "price": 25000.0,
                "condition": "NEW",
            }),
        )
        .await
    }

    /// Create a client and return its id.
    pub async fn create_client(&self, name: &str) -> i64 {
        self.create(
            "/api/clients",
            serde_json::json!({
                "clientName": name,
                "contactInfo": format!("{name}@example.com"),
            }),
        )
        .await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `details` list of an error body.
    pub fn details(&self) -> Vec<String> {
        self.body["details"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A name unique to this process and call, for tests sharing a database.
pub fn unique(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("{prefix}-{}-{nanos}-{n}", std::process::id())
}
