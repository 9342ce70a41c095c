//! reqwest-backed implementation of [`MarketplaceApi`].

use async_trait::async_trait;
use serde::Deserialize;

use haven_core::types::DbId;
use haven_db::models::cart_item::CartItem;
use haven_db::models::favorite::Favorite;
use haven_db::models::order::{CreateOrder, Order};
use haven_db::models::property::Property;

use crate::api::MarketplaceApi;
use crate::error::ClientError;

/// HTTP client for the marketplace server.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

// Response envelopes, mirroring the server's wire shapes.

#[derive(Deserialize)]
struct PropertyEnvelope {
    property: Property,
}

#[derive(Deserialize)]
struct FavoriteEnvelope {
    favorite: Favorite,
}

#[derive(Deserialize)]
struct FavoriteListEnvelope {
    favorites: Vec<Favorite>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartItemEnvelope {
    cart_item: CartItem,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartListEnvelope {
    cart_items: Vec<CartItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BulkDeleteEnvelope {
    deleted_count: u64,
}

#[derive(Deserialize)]
struct OrderEnvelope {
    order: Order,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
}

impl HttpApi {
    /// Create a client for a server at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Decode a success body, or turn an `{error, code}` failure body into
    /// [`ClientError::Api`].
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.json::<ErrorBody>().await.unwrap_or(ErrorBody {
            error: format!("Request failed with status {status}"),
            code: "UNKNOWN".to_string(),
        });
        Err(ClientError::Api {
            status: status.as_u16(),
            code: body.code,
            message: body.error,
        })
    }

    async fn expect_ok(response: reqwest::Response) -> Result<(), ClientError> {
        Self::decode::<serde_json::Value>(response).await.map(|_| ())
    }
}

#[async_trait]
impl MarketplaceApi for HttpApi {
    async fn get_property(&self, id: DbId) -> Result<Property, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/properties/{id}")))
            .send()
            .await?;
        Ok(Self::decode::<PropertyEnvelope>(response).await?.property)
    }

    async fn list_favorites(&self, user: &str) -> Result<Vec<Favorite>, ClientError> {
        let response = self
            .client
            .get(self.url("/favorites"))
            .query(&[("userIdentifier", user)])
            .send()
            .await?;
        Ok(Self::decode::<FavoriteListEnvelope>(response)
            .await?
            .favorites)
    }

    async fn add_favorite(&self, user: &str, property_id: DbId) -> Result<Favorite, ClientError> {
        let response = self
            .client
            .post(self.url("/favorites"))
            .json(&serde_json::json!({
                "userIdentifier": user,
                "propertyId": property_id,
            }))
            .send()
            .await?;
        Ok(Self::decode::<FavoriteEnvelope>(response).await?.favorite)
    }

    async fn remove_favorite(&self, user: &str, property_id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url("/favorites"))
            .query(&[
                ("userIdentifier", user),
                ("propertyId", &property_id.to_string()),
            ])
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    async fn list_cart(&self, user: &str) -> Result<Vec<CartItem>, ClientError> {
        let response = self
            .client
            .get(self.url("/cart"))
            .query(&[("userIdentifier", user)])
            .send()
            .await?;
        Ok(Self::decode::<CartListEnvelope>(response).await?.cart_items)
    }

    async fn add_cart_item(&self, user: &str, property_id: DbId) -> Result<CartItem, ClientError> {
        let response = self
            .client
            .post(self.url("/cart"))
            .json(&serde_json::json!({
                "userIdentifier": user,
                "propertyId": property_id,
            }))
            .send()
            .await?;
        Ok(Self::decode::<CartItemEnvelope>(response).await?.cart_item)
    }

    async fn remove_cart_item(&self, user: &str, property_id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url("/cart"))
            .query(&[
                ("userIdentifier", user),
                ("propertyId", &property_id.to_string()),
            ])
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    async fn clear_cart(&self, user: &str) -> Result<u64, ClientError> {
        let response = self
            .client
            .delete(self.url("/cart/clear"))
            .query(&[("userIdentifier", user)])
            .send()
            .await?;
        Ok(Self::decode::<BulkDeleteEnvelope>(response)
            .await?
            .deleted_count)
    }

    async fn create_order(&self, order: &CreateOrder) -> Result<Order, ClientError> {
        let response = self
            .client
            .post(self.url("/orders"))
            .json(order)
            .send()
            .await?;
        Ok(Self::decode::<OrderEnvelope>(response).await?.order)
    }
}
