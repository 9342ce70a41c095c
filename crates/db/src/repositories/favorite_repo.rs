//! Repository for the `favorites` table.
//!
//! Rows are addressed by (user_identifier, property_id); the table
//! carries the unique constraint `uq_favorites_user_property`.

use sqlx::PgPool;

use haven_core::types::DbId;

use crate::models::favorite::Favorite;

/// Column list for `favorites` queries.
const COLUMNS: &str = "id, user_identifier, property_id, created_at";

/// Provides favorite operations keyed by user and property.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a favorite and return the stored row.
    pub async fn insert(
        pool: &PgPool,
        user_identifier: &str,
        property_id: DbId,
    ) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (user_identifier, property_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_identifier)
            .bind(property_id)
            .fetch_one(pool)
            .await
    }

    /// Check whether the user already favorited the property.
    pub async fn exists(
        pool: &PgPool,
        user_identifier: &str,
        property_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(\
                 SELECT 1 FROM favorites \
                 WHERE user_identifier = $1 AND property_id = $2)",
        )
        .bind(user_identifier)
        .bind(property_id)
        .fetch_one(pool)
        .await
    }

    /// List all favorites for a user, oldest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_identifier: &str,
    ) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM favorites \
             WHERE user_identifier = $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_identifier)
            .fetch_all(pool)
            .await
    }

    /// Remove one favorite. Returns `true` if a row was deleted.
    pub async fn delete(
        pool: &PgPool,
        user_identifier: &str,
        property_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM favorites WHERE user_identifier = $1 AND property_id = $2",
        )
        .bind(user_identifier)
        .bind(property_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
