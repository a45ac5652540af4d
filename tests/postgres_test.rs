//! End-to-end tests against PostgreSQL.
//!
//! Skipped unless `CARSHOP_TEST_DATABASE_URL` points at a database the
//! tests may migrate and write to. Names are unique per run so the tests
//! can share one database.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{TestApp, unique};

macro_rules! postgres_app {
    () => {
        match TestApp::postgres().await {
            Some(app) => app,
            None => {
                eprintln!("{} not set, skipping", helpers::TEST_DATABASE_URL);
                return;
            }
        }
    };
}

#[tokio::test]
async fn test_car_round_trip_and_search() {
    let app = postgres_app!();
    let make = unique("Make");

    let id = app.create_car(&make, "Roadster").await;

    let fetched = app.request("GET", &format!("/api/cars/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["make"], make.as_str());

    let search = app
        .request(
            "GET",
            &format!("/api/cars/search?make={make}&condition=NEW"),
            None,
        )
        .await;
    assert_eq!(search.status, StatusCode::OK);
    assert_eq!(search.body.as_array().map(Vec::len), Some(1));

    let deleted = app.request("DELETE", &format!("/api/cars/{id}"), None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_order_with_unknown_client_is_rejected() {
    let app = postgres_app!();
    let car_id = app.create_car(&unique("Make"), "Sedan").await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({
                "id": 1,
                "clientId": i32::MAX,
                "carId": car_id,
                "status": "PENDING",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(
        response.body["message"],
        format!("Client {} does not exist", i32::MAX)
    );
}

#[tokio::test]
async fn test_referenced_car_cannot_be_deleted() {
    let app = postgres_app!();
    let client_id = app.create_client(&unique("Client")).await;
    let car_id = app.create_car(&unique("Make"), "Coupe").await;
    let order_id = app
        .create(
            "/api/orders",
            json!({"id": 1, "clientId": client_id, "carId": car_id, "status": "PENDING"}),
        )
        .await;

    let response = app
        .request("DELETE", &format!("/api/cars/{car_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let order = app
        .request("DELETE", &format!("/api/orders/{order_id}"), None)
        .await;
    assert_eq!(order.status, StatusCode::NO_CONTENT);
    let car = app
        .request("DELETE", &format!("/api/cars/{car_id}"), None)
        .await;
    assert_eq!(car.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_order_update_without_date_keeps_stored_date() {
    let app = postgres_app!();
    let client_id = app.create_client(&unique("Client")).await;
    let car_id = app.create_car(&unique("Make"), "Hatch").await;
    let order_id = app
        .create(
            "/api/orders",
            json!({
                "id": 1,
                "clientId": client_id,
                "carId": car_id,
                "creationDate": "2022-05-01T12:00:00Z",
                "status": "PENDING",
            }),
        )
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/orders/{order_id}"),
            Some(json!({
                "id": 1,
                "clientId": client_id,
                "carId": car_id,
                "status": "APPROVED",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "APPROVED");
    assert_eq!(response.body["creationDate"], "2022-05-01T12:00:00Z");

    app.request("DELETE", &format!("/api/orders/{order_id}"), None)
        .await;
}

#[tokio::test]
async fn test_oversized_values_are_validation_errors() {
    let app = postgres_app!();

    let client = app
        .request(
            "POST",
            "/api/clients",
            Some(json!({"clientName": "n".repeat(256), "contactInfo": "x@example.com"})),
        )
        .await;
    assert_eq!(client.status, StatusCode::BAD_REQUEST);
    assert_eq!(client.body["error"], "VALIDATION_ERROR");

    let car = app
        .request(
            "POST",
            "/api/cars",
            Some(json!({
                "id": 1,
                "make": "M".repeat(300),
                "model": "Roadster",
                "year": 2020,
                "price": 1.0,
                "condition": "NEW",
            })),
        )
        .await;
    assert_eq!(car.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        car.details(),
        vec!["Make must be at most 255 characters".to_string()]
    );
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let app = postgres_app!();
    let username = unique("user");
    let body = json!({
        "id": 1,
        "username": username,
        "password": "secret",
        "role": "CLIENT",
    });

    app.create("/api/users", body.clone()).await;
    let response = app.request("POST", "/api/users", Some(body)).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "DUPLICATE_USERNAME");
}

#[tokio::test]
async fn test_calls_reach_the_audit_table() {
    let app = postgres_app!();
    let make = unique("Audited");
    app.create_car(&make, "Wagon").await;

    let response = app.request("GET", "/api/audit?limit=50", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let entries = response.body.as_array().unwrap();
    assert!(entries.iter().any(|e| {
        e["methodName"] == "add_car"
            && e["methodArgs"].as_str().is_some_and(|args| args.contains(&make))
    }));
}

#[tokio::test]
async fn test_health_reports_connected_database() {
    let app = postgres_app!();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}
