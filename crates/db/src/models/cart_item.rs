//! Cart item models. Same shape as favorites; unique per
//! (userIdentifier, propertyId).

use haven_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cart_items` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: DbId,
    pub user_identifier: String,
    pub property_id: DbId,
    pub created_at: Timestamp,
}

/// Create payload for `POST /cart`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCartItem {
    pub user_identifier: Option<String>,
    pub property_id: Option<DbId>,
}
