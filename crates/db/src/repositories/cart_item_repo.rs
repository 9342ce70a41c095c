//! Repository for the `cart_items` table.
//!
//! Same addressing as favorites, plus a bulk clear used by checkout.

use sqlx::PgPool;

use haven_core::types::DbId;

use crate::models::cart_item::CartItem;

/// Column list for `cart_items` queries.
const COLUMNS: &str = "id, user_identifier, property_id, created_at";

/// Provides cart operations keyed by user and property.
pub struct CartItemRepo;

impl CartItemRepo {
    /// Insert a cart item and return the stored row.
    pub async fn insert(
        pool: &PgPool,
        user_identifier: &str,
        property_id: DbId,
    ) -> Result<CartItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO cart_items (user_identifier, property_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CartItem>(&query)
            .bind(user_identifier)
            .bind(property_id)
            .fetch_one(pool)
            .await
    }

    /// Check whether the property is already in the user's cart.
    pub async fn exists(
        pool: &PgPool,
        user_identifier: &str,
        property_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(\
                 SELECT 1 FROM cart_items \
                 WHERE user_identifier = $1 AND property_id = $2)",
        )
        .bind(user_identifier)
        .bind(property_id)
        .fetch_one(pool)
        .await
    }

    /// List all cart items for a user, oldest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_identifier: &str,
    ) -> Result<Vec<CartItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cart_items \
             WHERE user_identifier = $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, CartItem>(&query)
            .bind(user_identifier)
            .fetch_all(pool)
            .await
    }

    /// Remove one cart item. Returns `true` if a row was deleted.
    pub async fn delete(
        pool: &PgPool,
        user_identifier: &str,
        property_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM cart_items WHERE user_identifier = $1 AND property_id = $2",
        )
        .bind(user_identifier)
        .bind(property_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove every cart item for a user in one statement.
    ///
    /// Returns the number of rows removed.
    pub async fn clear_for_user(
        pool: &PgPool,
        user_identifier: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_identifier = $1")
            .bind(user_identifier)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
