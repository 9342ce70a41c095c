//! Repository for the `orders` table.

use sqlx::PgPool;

use haven_core::types::DbId;

use crate::models::order::{NewOrder, Order, OrderFilter, OrderPatch};

/// Column list for `orders` queries.
const COLUMNS: &str = "\
    id, property_id, buyer_name, buyer_email, buyer_phone, buyer_address, \
    buyer_city, buyer_state, buyer_zip_code, inquiry_type, \
    preferred_contact_time, additional_notes, order_status, total_value, \
    created_at, updated_at";

/// Default page size for order listing.
const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size for order listing.
const MAX_LIMIT: i64 = 100;

/// Provides CRUD and filtered listing for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a validated order and return the stored row.
    pub async fn insert(pool: &PgPool, input: &NewOrder) -> Result<Order, sqlx::Error> {
        let query = format!(
            "INSERT INTO orders \
                 (property_id, buyer_name, buyer_email, buyer_phone, buyer_address, \
                  buyer_city, buyer_state, buyer_zip_code, inquiry_type, \
                  preferred_contact_time, additional_notes, order_status, total_value) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(input.property_id)
            .bind(&input.buyer_name)
            .bind(&input.buyer_email)
            .bind(&input.buyer_phone)
            .bind(&input.buyer_address)
            .bind(&input.buyer_city)
            .bind(&input.buyer_state)
            .bind(&input.buyer_zip_code)
            .bind(&input.inquiry_type)
            .bind(&input.preferred_contact_time)
            .bind(&input.additional_notes)
            .bind(&input.order_status)
            .bind(input.total_value)
            .fetch_one(pool)
            .await
    }

    /// Find an order by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List orders matching the filter, paginated, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &OrderFilter,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let limit = limit.filter(|&l| l > 0).unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = offset.unwrap_or(0).max(0);

        let (where_clause, next_idx) = filter_clause(filter);
        let query = format!(
            "SELECT {COLUMNS} FROM orders {where_clause} \
             ORDER BY created_at DESC \
             LIMIT ${next_idx} OFFSET ${}",
            next_idx + 1
        );

        let mut q = sqlx::query_as::<_, Order>(&query);
        if let Some(ref status) = filter.status {
            q = q.bind(status);
        }
        if let Some(property_id) = filter.property_id {
            q = q.bind(property_id);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count orders matching the filter.
    pub async fn count(pool: &PgPool, filter: &OrderFilter) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = filter_clause(filter);
        let query = format!("SELECT COUNT(*)::BIGINT FROM orders {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(ref status) = filter.status {
            q = q.bind(status);
        }
        if let Some(property_id) = filter.property_id {
            q = q.bind(property_id);
        }
        q.fetch_one(pool).await
    }

    /// Apply a validated partial update; `updated_at` is always bumped.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &OrderPatch,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET \
                 property_id            = COALESCE($2, property_id), \
                 buyer_name             = COALESCE($3, buyer_name), \
                 buyer_email            = COALESCE($4, buyer_email), \
                 buyer_phone            = COALESCE($5, buyer_phone), \
                 buyer_address          = COALESCE($6, buyer_address), \
                 buyer_city             = COALESCE($7, buyer_city), \
                 buyer_state            = COALESCE($8, buyer_state), \
                 buyer_zip_code         = COALESCE($9, buyer_zip_code), \
                 inquiry_type           = COALESCE($10, inquiry_type), \
                 preferred_contact_time = COALESCE($11, preferred_contact_time), \
                 additional_notes       = COALESCE($12, additional_notes), \
                 order_status           = COALESCE($13, order_status), \
                 total_value            = COALESCE($14, total_value), \
                 updated_at             = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(patch.property_id)
            .bind(&patch.buyer_name)
            .bind(&patch.buyer_email)
            .bind(&patch.buyer_phone)
            .bind(&patch.buyer_address)
            .bind(&patch.buyer_city)
            .bind(&patch.buyer_state)
            .bind(&patch.buyer_zip_code)
            .bind(&patch.inquiry_type)
            .bind(&patch.preferred_contact_time)
            .bind(&patch.additional_notes)
            .bind(&patch.order_status)
            .bind(patch.total_value)
            .fetch_optional(pool)
            .await
    }

    /// Delete an order by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build the WHERE clause for the order filter.
///
/// Returns `(where_clause, next_bind_index)`; bind order is status
/// first, then property_id.
fn filter_clause(filter: &OrderFilter) -> (String, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;

    if filter.status.is_some() {
        conditions.push(format!("order_status = ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.property_id.is_some() {
        conditions.push(format!("property_id = ${bind_idx}"));
        bind_idx += 1;
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_idx)
}
