//! HTTP-level integration tests for the `/orders` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

use haven_db::models::property::NewProperty;
use haven_db::repositories::PropertyRepo;

async fn seed_property(pool: &PgPool, title: &str) -> i64 {
    let input = NewProperty {
        title: title.to_string(),
        description: "Seeded listing".to_string(),
        price: 300_000,
        location: "Denver, CO".to_string(),
        property_type: "house".to_string(),
        bedrooms: 3,
        bathrooms: 2,
        area: 1600,
        images: vec![],
        featured: false,
        status: "available".to_string(),
        amenities: vec![],
        year_built: 2005,
    };
    PropertyRepo::insert(pool, &input).await.unwrap().id
}

fn order_payload(property_id: i64) -> serde_json::Value {
    json!({
        "propertyId": property_id,
        "buyerName": "Dana Reyes",
        "buyerEmail": "Dana@Example.com",
        "buyerPhone": "555-0101",
        "buyerAddress": "12 Elm St",
        "buyerCity": "Denver",
        "buyerState": "CO",
        "buyerZipCode": "80202",
        "inquiryType": "offer",
        "preferredContactTime": "morning",
        "totalValue": 300000
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_order_lowercases_email_and_defaults_status(pool: PgPool) {
    let property_id = seed_property(&pool, "Order Home").await;

    let response = post_json(build_test_app(pool), "/orders", order_payload(property_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Order created successfully");
    assert_eq!(json["order"]["buyerEmail"], "dana@example.com");
    assert_eq!(json["order"]["orderStatus"], "pending");
    assert_eq!(json["order"]["propertyId"], property_id);
    assert_eq!(json["order"]["additionalNotes"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_order_for_missing_property_is_404(pool: PgPool) {
    let response = post_json(build_test_app(pool), "/orders", order_payload(999_999)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "PROPERTY_NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_order_validation_reports_first_failure(pool: PgPool) {
    let property_id = seed_property(&pool, "Validation Home").await;

    let mut payload = order_payload(property_id);
    payload.as_object_mut().unwrap().remove("buyerName");
    let response = post_json(build_test_app(pool.clone()), "/orders", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "MISSING_BUYER_NAME");

    let mut payload = order_payload(property_id);
    payload["buyerEmail"] = json!("not-an-email");
    let response = post_json(build_test_app(pool), "/orders", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_EMAIL");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_orders_filters_by_status(pool: PgPool) {
    let property_id = seed_property(&pool, "Filter Home").await;

    post_json(
        build_test_app(pool.clone()),
        "/orders",
        order_payload(property_id),
    )
    .await;
    let mut completed = order_payload(property_id);
    completed["orderStatus"] = json!("completed");
    post_json(build_test_app(pool.clone()), "/orders", completed).await;

    let response = get(build_test_app(pool), "/orders?status=completed").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["orders"][0]["orderStatus"], "completed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_order_status(pool: PgPool) {
    let property_id = seed_property(&pool, "Update Home").await;
    let created = post_json(
        build_test_app(pool.clone()),
        "/orders",
        order_payload(property_id),
    )
    .await;
    let id = body_json(created).await["order"]["id"].as_i64().unwrap();

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/orders?id={id}"),
        json!({ "orderStatus": "contacted" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["order"]["orderStatus"], "contacted");

    let response = put_json(
        build_test_app(pool),
        &format!("/orders?id={id}"),
        json!({ "orderStatus": "shipped" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_ORDER_STATUS");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_order_is_404(pool: PgPool) {
    let response = put_json(
        build_test_app(pool),
        "/orders?id=999999",
        json!({ "orderStatus": "contacted" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "ORDER_NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_order(pool: PgPool) {
    let property_id = seed_property(&pool, "Delete Home").await;
    let created = post_json(
        build_test_app(pool.clone()),
        "/orders",
        order_payload(property_id),
    )
    .await;
    let id = body_json(created).await["order"]["id"].as_i64().unwrap();

    let response = delete(build_test_app(pool.clone()), &format!("/orders?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(build_test_app(pool), &format!("/orders?id={id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "ORDER_NOT_FOUND");
}
