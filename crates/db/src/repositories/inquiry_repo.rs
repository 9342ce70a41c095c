//! Repository for the `inquiries` table.

use sqlx::PgPool;

use haven_core::types::DbId;

use crate::models::inquiry::{Inquiry, InquiryFilter, InquiryPatch, NewInquiry};

/// Column list for `inquiries` queries.
const COLUMNS: &str = "id, property_id, name, email, phone, message, status, created_at";

/// Default page size for inquiry listing.
const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size for inquiry listing.
const MAX_LIMIT: i64 = 100;

/// Provides CRUD and filtered listing for inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Insert a validated inquiry and return the stored row.
    pub async fn insert(pool: &PgPool, input: &NewInquiry) -> Result<Inquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO inquiries (property_id, name, email, phone, message, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(input.property_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find an inquiry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries WHERE id = $1");
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List inquiries matching the filter, paginated, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &InquiryFilter,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Inquiry>, sqlx::Error> {
        let limit = limit.filter(|&l| l > 0).unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = offset.unwrap_or(0).max(0);

        let (where_clause, next_idx) = filter_clause(filter);
        let query = format!(
            "SELECT {COLUMNS} FROM inquiries {where_clause} \
             ORDER BY created_at DESC \
             LIMIT ${next_idx} OFFSET ${}",
            next_idx + 1
        );

        let mut q = sqlx::query_as::<_, Inquiry>(&query);
        if let Some(ref status) = filter.status {
            q = q.bind(status);
        }
        if let Some(property_id) = filter.property_id {
            q = q.bind(property_id);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count inquiries matching the filter.
    pub async fn count(pool: &PgPool, filter: &InquiryFilter) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = filter_clause(filter);
        let query = format!("SELECT COUNT(*)::BIGINT FROM inquiries {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(ref status) = filter.status {
            q = q.bind(status);
        }
        if let Some(property_id) = filter.property_id {
            q = q.bind(property_id);
        }
        q.fetch_one(pool).await
    }

    /// Apply a validated partial update.
    ///
    /// Returns `None` if no inquiry with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &InquiryPatch,
    ) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE inquiries SET \
                 property_id = COALESCE($2, property_id), \
                 name        = COALESCE($3, name), \
                 email       = COALESCE($4, email), \
                 phone       = COALESCE($5, phone), \
                 message     = COALESCE($6, message), \
                 status      = COALESCE($7, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .bind(patch.property_id)
            .bind(&patch.name)
            .bind(&patch.email)
            .bind(&patch.phone)
            .bind(&patch.message)
            .bind(&patch.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an inquiry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build the WHERE clause for the inquiry filter.
///
/// Returns `(where_clause, next_bind_index)`; bind order is status
/// first, then property_id.
fn filter_clause(filter: &InquiryFilter) -> (String, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;

    if filter.status.is_some() {
        conditions.push(format!("status = ${bind_idx}"));
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
