//! HTTP-level integration tests for the `/properties` endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

fn loft_payload() -> serde_json::Value {
    json!({
        "title": "Modern Loft",
        "description": "Open-plan loft with exposed brick",
        "price": 500000,
        "location": "Austin, TX",
        "type": "condo",
        "bedrooms": 2,
        "bathrooms": 2,
        "area": 1200,
        "images": ["https://img.example/loft.jpg"],
        "amenities": ["Pool", "Gym"],
        "yearBuilt": 2015
    })
}

async fn create_property(app: axum::Router, payload: serde_json::Value) -> serde_json::Value {
    let response = post_json(app, "/properties", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn timestamp(value: &serde_json::Value) -> DateTime<Utc> {
    value
        .as_str()
        .unwrap()
        .parse()
        .expect("timestamp fields should be RFC 3339")
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_defaults_status_and_featured(pool: PgPool) {
    let app = build_test_app(pool);
    let json = create_property(app, loft_payload()).await;

    assert_eq!(json["message"], "Property created successfully");
    assert_eq!(json["property"]["title"], "Modern Loft");
    assert_eq!(json["property"]["status"], "available");
    assert_eq!(json["property"]["featured"], false);
    assert_eq!(json["property"]["yearBuilt"], 2015);
    assert!(json["property"]["id"].as_i64().unwrap() > 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_missing_title_reports_field_code(pool: PgPool) {
    let app = build_test_app(pool);
    let mut payload = loft_payload();
    payload.as_object_mut().unwrap().remove("title");

    let response = post_json(app, "/properties", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "MISSING_TITLE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_negative_price(pool: PgPool) {
    let app = build_test_app(pool);
    let mut payload = loft_payload();
    payload["price"] = json!(-5);

    let response = post_json(app, "/properties", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_PRICE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_unknown_type(pool: PgPool) {
    let app = build_test_app(pool);
    let mut payload = loft_payload();
    payload["type"] = json!("castle");

    let response = post_json(app, "/properties", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_TYPE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_query_and_path_read_the_same_row(pool: PgPool) {
    let created = create_property(build_test_app(pool.clone()), loft_payload()).await;
    let id = created["property"]["id"].as_i64().unwrap();

    let by_query = get(build_test_app(pool.clone()), &format!("/properties?id={id}")).await;
    assert_eq!(by_query.status(), StatusCode::OK);
    let by_query = body_json(by_query).await;

    let by_path = get(build_test_app(pool), &format!("/properties/{id}")).await;
    assert_eq!(by_path.status(), StatusCode::OK);
    let by_path = body_json(by_path).await;

    assert_eq!(by_query["property"], by_path["property"]);
    assert_eq!(by_query["property"]["title"], "Modern Loft");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_property_is_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/properties?id=999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "PROPERTY_NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_malformed_id_is_400(pool: PgPool) {
    let response = get(build_test_app(pool), "/properties?id=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_ID");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_combine_with_and(pool: PgPool) {
    let mut cheap = loft_payload();
    cheap["title"] = json!("Cheap House");
    cheap["type"] = json!("house");
    cheap["price"] = json!(100000);
    create_property(build_test_app(pool.clone()), cheap).await;

    let mut pricey_house = loft_payload();
    pricey_house["title"] = json!("Pricey House");
    pricey_house["type"] = json!("house");
    pricey_house["price"] = json!(900000);
    create_property(build_test_app(pool.clone()), pricey_house).await;

    create_property(build_test_app(pool.clone()), loft_payload()).await;

    let response = get(
        build_test_app(pool),
        "/properties?type=house&minPrice=500000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["properties"][0]["title"], "Pricey House");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_wildcard_and_malformed_filters_are_ignored(pool: PgPool) {
    create_property(build_test_app(pool.clone()), loft_payload()).await;

    // `type=all` is a wildcard and `minPrice=cheap` is unparseable; both
    // should leave the list unfiltered.
    let response = get(
        build_test_app(pool),
        "/properties?type=all&minPrice=cheap",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["count"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_negative_limit_falls_back_to_default(pool: PgPool) {
    create_property(build_test_app(pool.clone()), loft_payload()).await;

    let response = get(build_test_app(pool), "/properties?limit=-1&offset=-3").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["properties"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_bumps_updated_at(pool: PgPool) {
    let created = create_property(build_test_app(pool.clone()), loft_payload()).await;
    let id = created["property"]["id"].as_i64().unwrap();
    let created_updated_at = timestamp(&created["property"]["updatedAt"]);

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/properties?id={id}"),
        json!({ "price": 525000 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["property"]["price"], 525000);
    assert_eq!(json["property"]["title"], "Modern Loft");
    assert!(
        timestamp(&json["property"]["updatedAt"]) > created_updated_at,
        "updatedAt should move forward on every update"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_empty_body_is_no_updates(pool: PgPool) {
    let created = create_property(build_test_app(pool.clone()), loft_payload()).await;
    let id = created["property"]["id"].as_i64().unwrap();

    let response = put_json(
        build_test_app(pool),
        &format!("/properties?id={id}"),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "NO_UPDATES");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_property_is_404(pool: PgPool) {
    let response = put_json(
        build_test_app(pool),
        "/properties?id=999999",
        json!({ "price": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "PROPERTY_NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_by_path_is_visible_by_query(pool: PgPool) {
    let created = create_property(build_test_app(pool.clone()), loft_payload()).await;
    let id = created["property"]["id"].as_i64().unwrap();

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/properties/{id}"),
        json!({ "status": "sold" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let by_query = get(build_test_app(pool), &format!("/properties?id={id}")).await;
    assert_eq!(body_json(by_query).await["property"]["status"], "sold");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_then_get_is_404(pool: PgPool) {
    let created = create_property(build_test_app(pool.clone()), loft_payload()).await;
    let id = created["property"]["id"].as_i64().unwrap();

    let response = delete(build_test_app(pool.clone()), &format!("/properties?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Property deleted successfully"
    );

    let response = get(build_test_app(pool), &format!("/properties/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
