//! Integration tests for the order endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_create_order_with_explicit_date() {
    let app = TestApp::in_memory();
    let client_id = app.create_client("Buyer").await;
    let car_id = app.create_car("Volvo", "XC60").await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({
                "id": 1,
                "clientId": client_id,
                "carId": car_id,
                "creationDate": "2024-03-01T10:00:00Z",
                "status": "PENDING",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["clientId"], client_id);
    assert_eq!(response.body["carId"], car_id);
    assert_eq!(response.body["status"], "PENDING");
    assert_eq!(response.body["creationDate"], "2024-03-01T10:00:00Z");
}

#[tokio::test]
async fn test_create_order_defaults_date_to_now() {
    let app = TestApp::in_memory();

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({"id": 1, "clientId": 1, "carId": 1, "status": "APPROVED"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["creationDate"].is_string());
}

#[tokio::test]
async fn test_update_order_keeps_stored_date() {
    let app = TestApp::in_memory();
    let id = app
        .create(
            "/api/orders",
            json!({
                "id": 1,
                "clientId": 1,
                "carId": 2,
                "creationDate": "2023-12-24T08:30:00Z",
                "status": "PENDING",
            }),
        )
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/orders/{id}"),
            Some(json!({"id": 1, "clientId": 1, "carId": 2, "status": "APPROVED"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "APPROVED");
    assert_eq!(response.body["creationDate"], "2023-12-24T08:30:00Z");

    let methods: Vec<String> = app
        .audit_log
        .as_ref()
        .unwrap()
        .entries()
        .into_iter()
        .map(|e| e.method_name)
        .collect();
    assert_eq!(methods, vec!["add_order", "update_order"]);
}

#[tokio::test]
async fn test_update_missing_order() {
    let app = TestApp::in_memory();

    let response = app
        .request(
            "PUT",
            "/api/orders/5",
            Some(json!({"id": 1, "clientId": 1, "carId": 2, "status": "REJECTED"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Order with ID 5 not found");
}

#[tokio::test]
async fn test_create_order_validation() {
    let app = TestApp::in_memory();

    let response = app
        .request("POST", "/api/orders", Some(json!({"carId": 0})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let details = response.details();
    assert!(details.contains(&"Client ID is mandatory".to_string()));
    assert!(details.contains(&"Car ID is mandatory".to_string()));
    assert!(details.contains(&"Order status cannot be null".to_string()));
    assert!(details.contains(&"ID should be positive".to_string()));
}

#[tokio::test]
async fn test_unknown_status_is_bad_request() {
    let app = TestApp::in_memory();

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({"id": 1, "clientId": 1, "carId": 1, "status": "SHIPPED"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_delete_order() {
    let app = TestApp::in_memory();
    let id = app
        .create(
            "/api/orders",
            json!({"id": 1, "clientId": 3, "carId": 4, "status": "PENDING"}),
        )
        .await;

    let deleted = app
        .request("DELETE", &format!("/api/orders/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let listed = app.request("GET", "/api/orders", None).await;
    assert_eq!(listed.body, json!([]));
}
