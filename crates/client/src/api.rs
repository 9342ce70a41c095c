//! The remote API seam.

use async_trait::async_trait;

use haven_core::types::DbId;
use haven_db::models::cart_item::CartItem;
use haven_db::models::favorite::Favorite;
use haven_db::models::order::{CreateOrder, Order};
use haven_db::models::property::Property;

use crate::error::ClientError;

/// Everything the client store needs from the marketplace server.
///
/// Implemented over HTTP by [`crate::http::HttpApi`]; tests substitute an
/// in-memory double.
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    async fn get_property(&self, id: DbId) -> Result<Property, ClientError>;

    async fn list_favorites(&self, user: &str) -> Result<Vec<Favorite>, ClientError>;
    async fn add_favorite(&self, user: &str, property_id: DbId) -> Result<Favorite, ClientError>;
    async fn remove_favorite(&self, user: &str, property_id: DbId) -> Result<(), ClientError>;

    async fn list_cart(&self, user: &str) -> Result<Vec<CartItem>, ClientError>;
    async fn add_cart_item(&self, user: &str, property_id: DbId) -> Result<CartItem, ClientError>;
    async fn remove_cart_item(&self, user: &str, property_id: DbId) -> Result<(), ClientError>;
    async fn clear_cart(&self, user: &str) -> Result<u64, ClientError>;

    async fn create_order(&self, order: &CreateOrder) -> Result<Order, ClientError>;
}
