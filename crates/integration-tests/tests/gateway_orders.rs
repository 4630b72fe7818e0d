//! Integration tests for the order surface of the dealer gateway.
//!
//! Every test spawns its own portal, so state never leaks between tests.
//! Money fields ride the wire as strings (`"5295"`), matching how the
//! dealer frontend submits them.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use ironwood_integration_tests::{TEST_ACCESS_KEY, TestPortal, spawn_portal};

async fn get(portal: &TestPortal, path: &str) -> (StatusCode, Value) {
    let resp = Client::new()
        .get(format!("{}{path}", portal.base_url))
        .header("x-portal-key", TEST_ACCESS_KEY)
        .send()
        .await
        .expect("request failed");
    let status = resp.status();
    let body = resp.json().await.expect("body was not JSON");
    (status, body)
}

async fn post(portal: &TestPortal, path: &str, body: &Value) -> (StatusCode, Value) {
    let resp = Client::new()
        .post(format!("{}{path}", portal.base_url))
        .header("x-portal-key", TEST_ACCESS_KEY)
        .json(body)
        .send()
        .await
        .expect("request failed");
    let status = resp.status();
    let body = resp.json().await.expect("body was not JSON");
    (status, body)
}

async fn patch(portal: &TestPortal, path: &str, body: &Value) -> (StatusCode, Value) {
    let resp = Client::new()
        .patch(format!("{}{path}", portal.base_url))
        .header("x-portal-key", TEST_ACCESS_KEY)
        .json(body)
        .send()
        .await
        .expect("request failed");
    let status = resp.status();
    let body = resp.json().await.expect("body was not JSON");
    (status, body)
}

fn caldwell_line(quantity: u32) -> Value {
    json!({
        "productSlug": "caldwell",
        "productName": "The Caldwell",
        "model": "Caldwell",
        "finish": "Windsor Cherry",
        "feltColor": "Championship Green",
        "size": "8 ft",
        "quantity": quantity,
        "unitPrice": "5295",
    })
}

// ============================================================================
// Listing & Detail Tests
// ============================================================================

#[tokio::test]
async fn test_order_list_returns_the_seeded_account() {
    let portal = spawn_portal().await;
    let (status, body) = get(&portal, "/dealer/orders").await;

    assert_eq!(status, StatusCode::OK);
    let orders = body["orders"].as_array().expect("order array");
    assert_eq!(orders.len(), 5);

    let numbers: Vec<&str> = orders
        .iter()
        .map(|o| o["orderNumber"].as_str().expect("order number"))
        .collect();
    for expected in ["IW-1001", "IW-1002", "IW-1003", "IW-1004", "IW-1005"] {
        assert!(numbers.contains(&expected), "missing {expected}");
    }
}

#[tokio::test]
async fn test_order_detail_carries_timeline_and_shipping() {
    let portal = spawn_portal().await;
    let (status, body) = get(&portal, "/dealer/orders/ord-1001").await;

    assert_eq!(status, StatusCode::OK);
    let order = &body["order"];
    assert_eq!(order["status"], "delivered");
    assert_eq!(order["total"], "5545");

    let timeline = order["timeline"].as_array().expect("timeline");
    assert_eq!(timeline.len(), 5);
    assert_eq!(timeline[0]["status"], "submitted");
    assert_eq!(timeline[4]["status"], "delivered");

    assert_eq!(order["shippingInfo"]["carrier"], "Saia LTL Freight");
    assert_eq!(order["lineItems"][0]["feltColor"], "Championship Green");
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let portal = spawn_portal().await;
    let (status, body) = get(&portal, "/dealer/orders/ord-9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
    assert_eq!(body["error"], "order not found: ord-9999");
}

// ============================================================================
// Creation Tests
// ============================================================================

#[tokio::test]
async fn test_created_order_gets_the_next_number() {
    let portal = spawn_portal().await;
    let (status, body) = post(
        &portal,
        "/dealer/orders",
        &json!({
            "dealerId": "d1",
            "lineItems": [caldwell_line(2)],
            "customerName": "Walk-in customer",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let order = &body["order"];
    assert_eq!(order["orderNumber"], "IW-1006");
    assert_eq!(order["status"], "draft");
    assert_eq!(order["dealerId"], "d1");
    assert_eq!(order["subtotal"], "10590");
    assert_eq!(order["total"], "10590");
    assert_eq!(order["timeline"].as_array().expect("timeline").len(), 0);

    let (_, list) = get(&portal, "/dealer/orders").await;
    assert_eq!(list["orders"].as_array().expect("order array").len(), 6);
}

#[tokio::test]
async fn test_order_without_line_items_is_rejected() {
    let portal = spawn_portal().await;
    let (status, body) = post(
        &portal,
        "/dealer/orders",
        &json!({ "dealerId": "d1", "lineItems": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_input");
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_order_walks_the_production_path() {
    let portal = spawn_portal().await;
    let (_, created) = post(
        &portal,
        "/dealer/orders",
        &json!({ "dealerId": "d1", "lineItems": [caldwell_line(1)] }),
    )
    .await;
    let id = created["order"]["id"].as_str().expect("order id").to_string();
    let path = format!("/dealer/orders/{id}/status");

    for (step, expected_len) in [
        ("submitted", 1),
        ("confirmed", 2),
        ("in_production", 3),
        ("shipped", 4),
        ("delivered", 5),
    ] {
        let (status, body) = patch(&portal, &path, &json!({ "status": step })).await;
        assert_eq!(status, StatusCode::OK, "step {step}");
        assert_eq!(body["order"]["status"], step);
        assert_eq!(
            body["order"]["timeline"].as_array().expect("timeline").len(),
            expected_len
        );
    }

    // Delivered is terminal.
    let (status, body) = patch(&portal, &path, &json!({ "status": "submitted" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "invalid_transition");
}

#[tokio::test]
async fn test_skipping_production_stages_conflicts() {
    let portal = spawn_portal().await;
    let (status, body) = patch(
        &portal,
        "/dealer/orders/ord-1005/status",
        &json!({ "status": "shipped" }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "invalid_transition");
    assert_eq!(body["error"], "cannot move order from draft to shipped");

    // The failed move left the order untouched.
    let (_, body) = get(&portal, "/dealer/orders/ord-1005").await;
    assert_eq!(body["order"]["status"], "draft");
    assert_eq!(
        body["order"]["timeline"].as_array().expect("timeline").len(),
        0
    );
}

#[tokio::test]
async fn test_unknown_status_name_is_a_bad_request() {
    let portal = spawn_portal().await;
    let (status, body) = patch(
        &portal,
        "/dealer/orders/ord-1005/status",
        &json!({ "status": "teleported" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_input");
    assert_eq!(body["error"], "invalid order status: teleported");
}
