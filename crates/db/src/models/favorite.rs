//! Favorite models. A favorite is unique per (userIdentifier, propertyId).

use haven_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `favorites` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: DbId,
    pub user_identifier: String,
    pub property_id: DbId,
    pub created_at: Timestamp,
}

/// Create payload for `POST /favorites`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavorite {
    pub user_identifier: Option<String>,
    pub property_id: Option<DbId>,
}
