//! Repository for the `properties` table.
//!
//! Listing supports the full marketplace filter set (free-text search,
//! price range, location substring, type, min bedrooms/bathrooms,
//! status, featured) with a dedicated COUNT query sharing the same
//! WHERE builder.

use sqlx::types::Json;
use sqlx::PgPool;

use haven_core::types::DbId;

use crate::models::property::{NewProperty, Property, PropertyFilter, PropertyPatch};

/// Column list for `properties` queries.
const COLUMNS: &str = "\
    id, title, description, price, location, type, bedrooms, bathrooms, \
    area, images, featured, status, amenities, year_built, created_at, updated_at";

/// Default page size for property listing.
const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size for property listing.
const MAX_LIMIT: i64 = 100;

/// Provides CRUD and filtered listing for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a validated property and return the stored row.
    pub async fn insert(pool: &PgPool, input: &NewProperty) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties \
                 (title, description, price, location, type, bedrooms, bathrooms, \
                  area, images, featured, status, amenities, year_built) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.location)
            .bind(&input.property_type)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.area)
            .bind(Json(&input.images))
            .bind(input.featured)
            .bind(&input.status)
            .bind(Json(&input.amenities))
            .bind(input.year_built)
            .fetch_one(pool)
            .await
    }

    /// Find a property by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a property exists. Used by the handlers of dependent
    /// entities to enforce the foreign-key invariant before insert.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM properties WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List properties matching the filter, paginated and ordered by id.
    pub async fn list(
        pool: &PgPool,
        filter: &PropertyFilter,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Property>, sqlx::Error> {
        let limit = limit.filter(|&l| l > 0).unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = offset.unwrap_or(0).max(0);

        let (where_clause, bind_values, bind_idx) = build_filter(filter);

        let query = format!(
            "SELECT {COLUMNS} FROM properties {where_clause} \
             ORDER BY id \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let q = bind_values
            .iter()
            .fold(sqlx::query_as::<_, Property>(&query), bind_value);
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count properties matching the filter (for pagination metadata).
    pub async fn count(pool: &PgPool, filter: &PropertyFilter) -> Result<i64, sqlx::Error> {
        let (where_clause, bind_values, _) = build_filter(filter);

        let query = format!("SELECT COUNT(*)::BIGINT FROM properties {where_clause}");

        let q = bind_values
            .iter()
            .fold(sqlx::query_scalar::<_, i64>(&query), bind_scalar_value);
        q.fetch_one(pool).await
    }

    /// Apply a validated partial update; `updated_at` is always bumped.
    ///
    /// Returns `None` if no property with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &PropertyPatch,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET \
                 title       = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 price       = COALESCE($4, price), \
                 location    = COALESCE($5, location), \
                 type        = COALESCE($6, type), \
                 bedrooms    = COALESCE($7, bedrooms), \
                 bathrooms   = COALESCE($8, bathrooms), \
                 area        = COALESCE($9, area), \
                 images      = COALESCE($10, images), \
                 featured    = COALESCE($11, featured), \
                 status      = COALESCE($12, status), \
                 amenities   = COALESCE($13, amenities), \
                 year_built  = COALESCE($14, year_built), \
                 updated_at  = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(&patch.description)
            .bind(patch.price)
            .bind(&patch.location)
            .bind(&patch.property_type)
            .bind(patch.bedrooms)
            .bind(patch.bathrooms)
            .bind(patch.area)
            .bind(patch.images.as_ref().map(Json))
            .bind(patch.featured)
            .bind(&patch.status)
            .bind(patch.amenities.as_ref().map(Json))
            .bind(patch.year_built)
            .fetch_optional(pool)
            .await
    }

    /// Delete a property by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built property queries.
enum BindValue {
    BigInt(i64),
    Int(i32),
    Text(String),
}

/// Build a WHERE clause and bind values from the filter.
///
/// Returns `(where_clause, bind_values, next_bind_index)`. Filters
/// combine with AND; the free-text search is an OR across title,
/// description, and location.
fn build_filter(filter: &PropertyFilter) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(ref search) = filter.search {
        conditions.push(format!(
            "(title ILIKE ${bind_idx} OR description ILIKE ${} OR location ILIKE ${})",
            bind_idx + 1,
            bind_idx + 2
        ));
        bind_idx += 3;
        let pattern = format!("%{search}%");
        bind_values.push(BindValue::Text(pattern.clone()));
        bind_values.push(BindValue::Text(pattern.clone()));
        bind_values.push(BindValue::Text(pattern));
    }

    if let Some(min_price) = filter.min_price {
        conditions.push(format!("price >= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(min_price));
    }

    if let Some(max_price) = filter.max_price {
        conditions.push(format!("price <= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(max_price));
    }

    if let Some(ref location) = filter.location {
        conditions.push(format!("location ILIKE ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(format!("%{location}%")));
    }

    if let Some(ref property_type) = filter.property_type {
        conditions.push(format!("type = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(property_type.clone()));
    }

    if let Some(min_bedrooms) = filter.min_bedrooms {
        conditions.push(format!("bedrooms >= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Int(min_bedrooms));
    }

    if let Some(min_bathrooms) = filter.min_bathrooms {
        conditions.push(format!("bathrooms >= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Int(min_bathrooms));
    }

    if let Some(ref status) = filter.status {
        conditions.push(format!("status = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(status.clone()));
    }

    // Matches the public contract: only `featured=true` narrows the list.
    if filter.featured == Some(true) {
        conditions.push("featured = TRUE".to_string());
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Bind one `BindValue` to a sqlx `QueryAs`.
fn bind_value<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    val: &'q BindValue,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    match val {
        BindValue::BigInt(v) => q.bind(*v),
        BindValue::Int(v) => q.bind(*v),
        BindValue::Text(v) => q.bind(v.as_str()),
    }
}

/// Bind one `BindValue` to a sqlx `QueryScalar`.
fn bind_scalar_value<'q>(
    q: sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments>,
    val: &'q BindValue,
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments> {
    match val {
        BindValue::BigInt(v) => q.bind(*v),
        BindValue::Int(v) => q.bind(*v),
        BindValue::Text(v) => q.bind(v.as_str()),
    }
}
