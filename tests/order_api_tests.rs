mod common;

use std::collections::BTreeMap;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use pos_backend::entities::{menus, order_items, orders, transactions};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, MockDatabase, Value as DbValue};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::common::test_app;

fn order_row(id: i32, status: &str, total: Decimal) -> orders::Model {
    orders::Model {
        id,
        no_order: "ORD20260311120000".to_string(),
        no_table: Some(4),
        date: "2026-03-11T12:00:00+00:00".parse().unwrap(),
        order_type: "dine-in".to_string(),
        customer_name: "Budi".to_string(),
        sub_total: dec!(45000),
        tax: dec!(4500),
        total,
        status: status.to_string(),
        user_id: 1,
    }
}

fn item_row(id: i32, order_id: i32, menu_id: i32, quantity: i32, price: Decimal) -> order_items::Model {
    order_items::Model {
        id,
        order_id,
        menu_id,
        quantity,
        notes: None,
        price,
    }
}

fn payment_row(id: i32, order_id: i32, received: Decimal, change: Decimal) -> transactions::Model {
    transactions::Model {
        id,
        order_id,
        amount_received: received,
        amount_change: change,
        status: "success".to_string(),
        transaction_date: "2026-03-11T12:00:00+00:00".parse().unwrap(),
    }
}

fn menu_row(id: i32, name: &str, category: &str, price: Decimal) -> menus::Model {
    menus::Model {
        id,
        image: None,
        name: name.to_string(),
        category: category.to_string(),
        price,
        description: None,
    }
}

fn create_order_body(amount_received: i64) -> Value {
    json!({
        "customerName": "Budi",
        "tableNumber": 4,
        "orderType": "dine-in",
        "items": [
            { "menuId": 1, "quantity": 2, "price": 20000 },
            { "menuId": 2, "quantity": 1, "price": 5000, "notes": "less sugar" }
        ],
        "subtotal": 45000,
        "tax": 4500,
        "total": 49500,
        "userId": 1,
        "amountReceived": amount_received
    })
}

async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        // Extractor rejections carry plain-text bodies; treat them like empty.
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Sufficient tender settles the order as paid in one request.
#[tokio::test]
async fn create_order_paid_when_tender_covers_total() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![order_row(7, "pending", dec!(49500))]])
        .append_query_results([
            vec![item_row(11, 7, 1, 2, dec!(20000))],
            vec![item_row(12, 7, 2, 1, dec!(5000))],
        ])
        .append_query_results([vec![payment_row(3, 7, dec!(50000), dec!(500))]])
        .append_query_results([vec![order_row(7, "paid", dec!(49500))]]);

    let (status, body) = post_json(test_app(db), "/orders", create_order_body(50000)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["orderStatus"], "paid");
    assert_eq!(body["orderId"], 7);
    assert_eq!(body["transactionId"], 3);
    assert!(body["noOrder"].as_str().unwrap().starts_with("ORD"));
}

/// Underpayment is recorded, not rejected: the order lands as pending.
#[tokio::test]
async fn create_order_pending_when_underpaid() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![order_row(7, "pending", dec!(49500))]])
        .append_query_results([
            vec![item_row(11, 7, 1, 2, dec!(20000))],
            vec![item_row(12, 7, 2, 1, dec!(5000))],
        ])
        .append_query_results([vec![payment_row(3, 7, dec!(40000), dec!(-9500))]])
        .append_query_results([vec![order_row(7, "pending", dec!(49500))]]);

    let (status, body) = post_json(test_app(db), "/orders", create_order_body(40000)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["orderStatus"], "pending");
}

#[tokio::test]
async fn create_order_rejects_empty_item_list() {
    let db = MockDatabase::new(DatabaseBackend::Postgres);

    let mut body = create_order_body(50000);
    body["items"] = json!([]);

    let (status, body) = post_json(test_app(db), "/orders", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("items"));
}

#[tokio::test]
async fn create_order_rejects_non_positive_quantity() {
    let db = MockDatabase::new(DatabaseBackend::Postgres);

    let mut body = create_order_body(50000);
    body["items"][1]["quantity"] = json!(0);

    let (status, body) = post_json(test_app(db), "/orders", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("quantity"));
}

/// Structurally incomplete requests never reach the writer; the Json
/// extractor rejects them.
#[tokio::test]
async fn create_order_rejects_missing_customer_name() {
    let db = MockDatabase::new(DatabaseBackend::Postgres);

    let mut body = create_order_body(50000);
    body.as_object_mut().unwrap().remove("customerName");

    let (status, _) = post_json(test_app(db), "/orders", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_order_rejects_unknown_order_type() {
    let db = MockDatabase::new(DatabaseBackend::Postgres);

    let mut body = create_order_body(50000);
    body["orderType"] = json!("delivery");

    let (status, _) = post_json(test_app(db), "/orders", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

/// The list endpoint groups item lines and the payment record under each
/// order, with menu name and category joined in.
#[tokio::test]
async fn list_orders_groups_items_and_payment() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![order_row(7, "paid", dec!(49500))]])
        .append_query_results([vec![payment_row(3, 7, dec!(50000), dec!(500))]])
        .append_query_results([vec![
            item_row(11, 7, 1, 2, dec!(20000)),
            item_row(12, 7, 2, 1, dec!(5000)),
        ]])
        .append_query_results([vec![
            menu_row(1, "Nasi Goreng", "Makanan", dec!(20000)),
            menu_row(2, "Es Teh", "Minuman", dec!(5000)),
        ]]);

    let response = test_app(db)
        .oneshot(
            Request::builder()
                .uri("/orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    let orders = body["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);

    let order = &orders[0];
    assert_eq!(order["orderId"], 7);
    assert_eq!(order["orderStatus"], "paid");
    assert_eq!(order["transactionId"], 3);

    let change: Decimal = serde_json::from_value(order["amountChange"].clone()).unwrap();
    assert_eq!(change, dec!(500));

    let items = order["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["menuName"], "Nasi Goreng");
    assert_eq!(items[0]["menuCategory"], "Makanan");
    assert_eq!(items[1]["menuName"], "Es Teh");
}

#[tokio::test]
async fn category_stats_sum_quantities_per_menu() {
    let row = BTreeMap::from([
        ("name", DbValue::from("Nasi Goreng")),
        ("total", DbValue::from(5i64)),
    ]);
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![row]]);

    let response = test_app(db)
        .oneshot(
            Request::builder()
                .uri("/orders/stats/Makanan")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["name"], "Nasi Goreng");
    assert_eq!(details[0]["total"], 5);
}
