//! HTTP-level integration tests for the `/inquiries` endpoints.

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
        price: 420_000,
        location: "Portland, OR".to_string(),
        property_type: "condo".to_string(),
        bedrooms: 2,
        bathrooms: 2,
        area: 1300,
        images: vec![],
        featured: false,
        status: "available".to_string(),
        amenities: vec![],
        year_built: 2010,
    };
    PropertyRepo::insert(pool, &input).await.unwrap().id
}

fn inquiry_payload(property_id: i64) -> serde_json::Value {
    json!({
        "propertyId": property_id,
        "name": "Sam Ortiz",
        "email": "Sam@Example.com",
        "phone": "555-0102",
        "message": "Is this still on the market?"
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_inquiry_defaults_status_and_lowercases_email(pool: PgPool) {
    let property_id = seed_property(&pool, "Inquiry Condo").await;

    let response = post_json(
        build_test_app(pool),
        "/inquiries",
        inquiry_payload(property_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Inquiry submitted successfully");
    assert_eq!(json["inquiry"]["status"], "new");
    assert_eq!(json["inquiry"]["email"], "sam@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_inquiry_validation_codes(pool: PgPool) {
    let property_id = seed_property(&pool, "Validation Condo").await;

    let mut payload = inquiry_payload(property_id);
    payload.as_object_mut().unwrap().remove("message");
    let response = post_json(build_test_app(pool.clone()), "/inquiries", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "MISSING_MESSAGE");

    let response = post_json(
        build_test_app(pool),
        "/inquiries",
        inquiry_payload(999_999),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "PROPERTY_NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_inquiries_newest_first_with_status_filter(pool: PgPool) {
    let property_id = seed_property(&pool, "Listed Condo").await;

    post_json(
        build_test_app(pool.clone()),
        "/inquiries",
        inquiry_payload(property_id),
    )
    .await;
    let second = post_json(
        build_test_app(pool.clone()),
        "/inquiries",
        inquiry_payload(property_id),
    )
    .await;
    let second_id = body_json(second).await["inquiry"]["id"].as_i64().unwrap();

    put_json(
        build_test_app(pool.clone()),
        &format!("/inquiries?id={second_id}"),
        json!({ "status": "read" }),
    )
    .await;

    let response = get(build_test_app(pool.clone()), "/inquiries?status=read").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["inquiries"][0]["id"], second_id);

    // An unknown status filter is rejected, not ignored.
    let response = get(build_test_app(pool), "/inquiries?status=archived").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_STATUS");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_inquiry_empty_body_is_no_updates(pool: PgPool) {
    let property_id = seed_property(&pool, "Updated Condo").await;
    let created = post_json(
        build_test_app(pool.clone()),
        "/inquiries",
        inquiry_payload(property_id),
    )
    .await;
    let id = body_json(created).await["inquiry"]["id"].as_i64().unwrap();

    let response = put_json(
        build_test_app(pool),
        &format!("/inquiries?id={id}"),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "NO_UPDATES");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_inquiry(pool: PgPool) {
    let property_id = seed_property(&pool, "Deleted Condo").await;
    let created = post_json(
        build_test_app(pool.clone()),
        "/inquiries",
        inquiry_payload(property_id),
    )
    .await;
    let id = body_json(created).await["inquiry"]["id"].as_i64().unwrap();

    let response = delete(build_test_app(pool.clone()), &format!("/inquiries?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(build_test_app(pool), &format!("/inquiries?id={id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "INQUIRY_NOT_FOUND");
}
