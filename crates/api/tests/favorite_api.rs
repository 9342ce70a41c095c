//! HTTP-level integration tests for the `/favorites` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

use haven_db::models::property::NewProperty;
use haven_db::repositories::PropertyRepo;

async fn seed_property(pool: &PgPool, title: &str) -> i64 {
    let input = NewProperty {
        title: title.to_string(),
        description: "Seeded listing".to_string(),
        price: 250_000,
        location: "Boise, ID".to_string(),
        property_type: "apartment".to_string(),
        bedrooms: 1,
        bathrooms: 1,
        area: 700,
        images: vec![],
        featured: false,
        status: "available".to_string(),
        amenities: vec![],
        year_built: 2018,
    };
    PropertyRepo::insert(pool, &input).await.unwrap().id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn add_and_list_favorites(pool: PgPool) {
    let property_id = seed_property(&pool, "Favorited Flat").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/favorites",
        json!({ "userIdentifier": "user-a", "propertyId": property_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Property added to favorites");
    assert_eq!(json["favorite"]["propertyId"], property_id);

    let response = get(build_test_app(pool), "/favorites?userIdentifier=user-a").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["favorites"][0]["userIdentifier"], "user-a");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_favorite_is_409(pool: PgPool) {
    let property_id = seed_property(&pool, "Twice Favorited").await;
    let payload = json!({ "userIdentifier": "user-a", "propertyId": property_id });

    let response = post_json(build_test_app(pool.clone()), "/favorites", payload.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(build_test_app(pool), "/favorites", payload).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "DUPLICATE_FAVORITE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn favorite_requires_user_identifier_and_property(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/favorites",
        json!({ "propertyId": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "MISSING_USER_IDENTIFIER");

    let response = post_json(
        build_test_app(pool.clone()),
        "/favorites",
        json!({ "userIdentifier": "user-a" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "MISSING_PROPERTY_ID");

    let response = get(build_test_app(pool), "/favorites").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "MISSING_USER_IDENTIFIER");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn favorite_missing_property_is_404(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/favorites",
        json!({ "userIdentifier": "user-a", "propertyId": 999999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "PROPERTY_NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn remove_favorite_by_user_and_property(pool: PgPool) {
    let property_id = seed_property(&pool, "Unfavorited Flat").await;
    post_json(
        build_test_app(pool.clone()),
        "/favorites",
        json!({ "userIdentifier": "user-a", "propertyId": property_id }),
    )
    .await;

    let uri = format!("/favorites?userIdentifier=user-a&propertyId={property_id}");
    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Property removed from favorites"
    );

    // Second removal finds nothing.
    let response = delete(build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "FAVORITE_NOT_FOUND");
}
