//! Local cart and favorites state, kept in lockstep with the server.
//!
//! Every mutation is remote-first: the server call happens before local
//! state changes, so a failed call leaves the store untouched.

use std::sync::Arc;

use haven_core::types::DbId;
use haven_db::models::order::{CreateOrder, Order};
use haven_db::models::property::Property;

use crate::api::MarketplaceApi;
use crate::error::{CheckoutError, ClientError};

/// Buyer details attached to every order placed at checkout.
#[derive(Debug, Clone)]
pub struct BuyerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub inquiry_type: String,
    pub preferred_contact_time: String,
    pub additional_notes: Option<String>,
}

/// A user's marketplace session: identity, cart, and favorites.
pub struct ClientStore {
    api: Arc<dyn MarketplaceApi>,
    user_identifier: String,
    cart: Vec<Property>,
    favorites: Vec<DbId>,
}

impl ClientStore {
    pub fn new(api: Arc<dyn MarketplaceApi>, user_identifier: impl Into<String>) -> Self {
        Self {
            api,
            user_identifier: user_identifier.into(),
            cart: Vec::new(),
            favorites: Vec::new(),
        }
    }

    pub fn user_identifier(&self) -> &str {
        &self.user_identifier
    }

    pub fn cart(&self) -> &[Property] {
        &self.cart
    }

    pub fn favorites(&self) -> &[DbId] {
        &self.favorites
    }

    pub fn is_favorite(&self, property_id: DbId) -> bool {
        self.favorites.contains(&property_id)
    }

    /// Rebuild local state from the server.
    ///
    /// Cart rows are re-joined against their properties; a row whose
    /// property has since been deleted is silently dropped.
    pub async fn sync(&mut self) -> Result<(), ClientError> {
        let favorites = self.api.list_favorites(&self.user_identifier).await?;
        let rows = self.api.list_cart(&self.user_identifier).await?;

        let mut cart = Vec::with_capacity(rows.len());
        for row in rows {
            match self.api.get_property(row.property_id).await {
                Ok(property) => cart.push(property),
                Err(err) if err.is_not_found() => {
                    tracing::warn!(property_id = row.property_id, "dropping stale cart row");
                }
                Err(err) => return Err(err),
            }
        }

        self.favorites = favorites.into_iter().map(|f| f.property_id).collect();
        self.cart = cart;
        Ok(())
    }

    pub async fn add_to_cart(&mut self, property: Property) -> Result<(), ClientError> {
        if self.cart.iter().any(|p| p.id == property.id) {
            return Ok(());
        }
        self.api
            .add_cart_item(&self.user_identifier, property.id)
            .await?;
        self.cart.push(property);
        Ok(())
    }

    pub async fn remove_from_cart(&mut self, property_id: DbId) -> Result<(), ClientError> {
        self.api
            .remove_cart_item(&self.user_identifier, property_id)
            .await?;
        self.cart.retain(|p| p.id != property_id);
        Ok(())
    }

    /// Flip a property's favorite state. Returns the new state.
    pub async fn toggle_favorite(&mut self, property_id: DbId) -> Result<bool, ClientError> {
        if self.is_favorite(property_id) {
            self.api
                .remove_favorite(&self.user_identifier, property_id)
                .await?;
            self.favorites.retain(|&id| id != property_id);
            Ok(false)
        } else {
            self.api
                .add_favorite(&self.user_identifier, property_id)
                .await?;
            self.favorites.push(property_id);
            Ok(true)
        }
    }

    /// Place one order per property in the cart.
    ///
    /// On full success the server cart is cleared and the local cart
    /// emptied. On partial failure the placed orders are kept, the
    /// successfully-ordered properties leave the local cart, and the
    /// failures come back in [`CheckoutError`]. Nothing is rolled back.
    pub async fn checkout(&mut self, buyer: &BuyerInfo) -> Result<Vec<Order>, CheckoutError> {
        if self.cart.is_empty() {
            return Ok(Vec::new());
        }

        let requests: Vec<_> = self
            .cart
            .iter()
            .map(|property| {
                let payload = order_payload(property, buyer);
                let api = Arc::clone(&self.api);
                let property_id = property.id;
                async move { (property_id, api.create_order(&payload).await) }
            })
            .collect();

        let mut created = Vec::new();
        let mut ordered_ids = Vec::new();
        let mut failures = Vec::new();
        for (property_id, result) in futures::future::join_all(requests).await {
            match result {
                Ok(order) => {
                    ordered_ids.push(property_id);
                    created.push(order);
                }
                Err(err) => failures.push((property_id, err)),
            }
        }

        if failures.is_empty() {
            if let Err(err) = self.api.clear_cart(&self.user_identifier).await {
                tracing::warn!(error = %err, "failed to clear server cart after checkout");
            }
            self.cart.clear();
            Ok(created)
        } else {
            self.cart.retain(|p| !ordered_ids.contains(&p.id));
            Err(CheckoutError { created, failures })
        }
    }
}

fn order_payload(property: &Property, buyer: &BuyerInfo) -> CreateOrder {
    CreateOrder {
        property_id: Some(property.id),
        buyer_name: Some(buyer.name.clone()),
        buyer_email: Some(buyer.email.clone()),
        buyer_phone: Some(buyer.phone.clone()),
        buyer_address: Some(buyer.address.clone()),
        buyer_city: Some(buyer.city.clone()),
        buyer_state: Some(buyer.state.clone()),
        buyer_zip_code: Some(buyer.zip_code.clone()),
        inquiry_type: Some(buyer.inquiry_type.clone()),
        preferred_contact_time: Some(buyer.preferred_contact_time.clone()),
        additional_notes: buyer.additional_notes.clone(),
        order_status: None,
        total_value: Some(property.price),
    }
}
