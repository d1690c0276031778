use actix_web::{App, http::StatusCode, test};
use diesel::prelude::*;
use serde_json::{Value, json};

use client_orders::configure;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(App::new().configure(|cfg| configure(cfg, $test_db.repo()))).await
    };
}

#[actix_web::test]
async fn creates_and_fetches_an_order() {
    let test_db = common::TestDb::new("api_creates_and_fetches_an_order.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Alice", "email": "alice@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let client: Value = test::read_body_json(resp).await;
    let client_id = client["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .set_json(json!({
            "client_id": client_id,
            "status": " pending ",
            "order_date": "1999-01-01T00:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let order: Value = test::read_body_json(resp).await;
    assert_eq!(order["status"], "PENDING");
    assert_eq!(order["client_id"], client_id);
    assert!(!order["order_date"].as_str().unwrap().starts_with("1999"));

    let order_id = order["id"].as_str().unwrap();
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/orders/{order_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, order);
}

#[actix_web::test]
async fn rejects_orders_for_unknown_clients_and_statuses() {
    let test_db = common::TestDb::new("api_rejects_orders.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .set_json(json!({"status": "pending"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "client id is required");

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .set_json(json!({"client_id": 77, "status": "BOGUS"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("77"));

    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Bob", "email": "bob@example.com"}))
        .to_request();
    let client: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .set_json(json!({"client_id": client["id"], "status": "BOGUS"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid status: BOGUS");

    let req = test::TestRequest::get().uri("/api/v1/orders").to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["total"], 0);
}

#[actix_web::test]
async fn order_lookup_errors() {
    let test_db = common::TestDb::new("api_order_lookup_errors.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/v1/orders/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/v1/orders/67e55044-10b1-426f-9247-bb680e5fe0c8")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "order not found: 67e55044-10b1-426f-9247-bb680e5fe0c8"
    );

    let req = test::TestRequest::get().uri("/api/v1/clients/12").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/v1/clients/abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn undecodable_stored_order_is_a_store_failure() {
    let test_db = common::TestDb::new("api_undecodable_stored_order.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Alice", "email": "alice@example.com"}))
        .to_request();
    let client: Value = test::call_and_read_body_json(&app, req).await;

    let mut conn = test_db.pool().get().unwrap();
    diesel::sql_query(format!(
        "INSERT INTO orders (id, client_id, order_date, status) \
         VALUES (X'0102', {}, '2025-05-01 09:00:00', 'PENDING')",
        client["id"]
    ))
    .execute(&mut conn)
    .unwrap();

    let req = test::TestRequest::get().uri("/api/v1/orders").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "store unavailable");
}

#[actix_web::test]
async fn searches_orders_with_query_parameters() {
    let test_db = common::TestDb::new("api_searches_orders.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Alice", "email": "alice@example.com"}))
        .to_request();
    let client: Value = test::call_and_read_body_json(&app, req).await;

    for status in ["pending", "shipped", "shipped"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/orders")
            .set_json(json!({"client_id": client["id"], "status": status}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/orders?status=SHIPPED&lines_per_page=1&order_by=status&direction=desc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total"], 2);
    assert_eq!(page["total_pages"], 2);
    assert_eq!(page["page"], 0);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
    assert_eq!(page["items"][0]["status"], "SHIPPED");

    let req = test::TestRequest::get()
        .uri("/api/v1/orders?status=lost")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid status: lost");

    let req = test::TestRequest::get()
        .uri("/api/v1/orders?page=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn rejects_invalid_clients() {
    let test_db = common::TestDb::new("api_rejects_invalid_clients.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Alice", "email": "nope"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Alice", "email": "alice@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Alice Again", "email": "alice@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}
