//! Order models and DTOs. An order is a structured checkout request
//! (viewing/offer/information/financing), one per cart property.

use haven_core::domain::{DEFAULT_ORDER_STATUS, INQUIRY_TYPES, ORDER_STATUSES};
use haven_core::error::CoreError;
use haven_core::types::{DbId, Timestamp};
use haven_core::validation;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: DbId,
    pub property_id: DbId,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: String,
    pub buyer_address: String,
    pub buyer_city: String,
    pub buyer_state: String,
    pub buyer_zip_code: String,
    pub inquiry_type: String,
    pub preferred_contact_time: String,
    pub additional_notes: Option<String>,
    pub order_status: String,
    pub total_value: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Raw create payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub property_id: Option<DbId>,
    pub buyer_name: Option<String>,
    pub buyer_email: Option<String>,
    pub buyer_phone: Option<String>,
    pub buyer_address: Option<String>,
    pub buyer_city: Option<String>,
    pub buyer_state: Option<String>,
    pub buyer_zip_code: Option<String>,
    pub inquiry_type: Option<String>,
    pub preferred_contact_time: Option<String>,
    pub additional_notes: Option<String>,
    pub order_status: Option<String>,
    pub total_value: Option<i64>,
}

/// Fully-validated create payload.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub property_id: DbId,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: String,
    pub buyer_address: String,
    pub buyer_city: String,
    pub buyer_state: String,
    pub buyer_zip_code: String,
    pub inquiry_type: String,
    pub preferred_contact_time: String,
    pub additional_notes: Option<String>,
    pub order_status: String,
    pub total_value: i64,
}

/// Raw partial-update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrder {
    pub property_id: Option<DbId>,
    pub buyer_name: Option<String>,
    pub buyer_email: Option<String>,
    pub buyer_phone: Option<String>,
    pub buyer_address: Option<String>,
    pub buyer_city: Option<String>,
    pub buyer_state: Option<String>,
    pub buyer_zip_code: Option<String>,
    pub inquiry_type: Option<String>,
    pub preferred_contact_time: Option<String>,
    pub additional_notes: Option<String>,
    pub order_status: Option<String>,
    pub total_value: Option<i64>,
}

/// Validated partial update.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub property_id: Option<DbId>,
    pub buyer_name: Option<String>,
    pub buyer_email: Option<String>,
    pub buyer_phone: Option<String>,
    pub buyer_address: Option<String>,
    pub buyer_city: Option<String>,
    pub buyer_state: Option<String>,
    pub buyer_zip_code: Option<String>,
    pub inquiry_type: Option<String>,
    pub preferred_contact_time: Option<String>,
    pub additional_notes: Option<String>,
    pub order_status: Option<String>,
    pub total_value: Option<i64>,
}

impl OrderPatch {
    pub fn is_empty(&self) -> bool {
        self.property_id.is_none()
            && self.buyer_name.is_none()
            && self.buyer_email.is_none()
            && self.buyer_phone.is_none()
            && self.buyer_address.is_none()
            && self.buyer_city.is_none()
            && self.buyer_state.is_none()
            && self.buyer_zip_code.is_none()
            && self.inquiry_type.is_none()
            && self.preferred_contact_time.is_none()
            && self.additional_notes.is_none()
            && self.order_status.is_none()
            && self.total_value.is_none()
    }
}

impl CreateOrder {
    pub fn validate(self) -> Result<NewOrder, CoreError> {
        let property_id = self.property_id.ok_or_else(|| {
            CoreError::validation("MISSING_PROPERTY_ID", "Property ID is required")
        })?;
        let buyer_name = require(&self.buyer_name, "Buyer name", "MISSING_BUYER_NAME")?;
        let buyer_email = match self.buyer_email {
            Some(ref v) => {
                validation::email(v, "Buyer email", "MISSING_BUYER_EMAIL", "INVALID_EMAIL")?
            }
            None => {
                return Err(CoreError::validation(
                    "MISSING_BUYER_EMAIL",
                    "Buyer email is required",
                ))
            }
        };
        let buyer_phone = require(&self.buyer_phone, "Buyer phone", "MISSING_BUYER_PHONE")?;
        let buyer_address = require(&self.buyer_address, "Buyer address", "MISSING_BUYER_ADDRESS")?;
        let buyer_city = require(&self.buyer_city, "Buyer city", "MISSING_BUYER_CITY")?;
        let buyer_state = require(&self.buyer_state, "Buyer state", "MISSING_BUYER_STATE")?;
        let buyer_zip_code =
            require(&self.buyer_zip_code, "Buyer zip code", "MISSING_BUYER_ZIP_CODE")?;
        let inquiry_type = match self.inquiry_type {
            Some(ref v) => {
                validation::non_empty(v, "Inquiry type", "MISSING_INQUIRY_TYPE")?;
                validation::one_of(v, INQUIRY_TYPES, "Inquiry type", "INVALID_INQUIRY_TYPE")?
            }
            None => {
                return Err(CoreError::validation(
                    "MISSING_INQUIRY_TYPE",
                    "Inquiry type is required",
                ))
            }
        };
        let preferred_contact_time = require(
            &self.preferred_contact_time,
            "Preferred contact time",
            "MISSING_PREFERRED_CONTACT_TIME",
        )?;
        let total_value = match self.total_value {
            Some(v) => validation::positive_i64(v, "Total value", "INVALID_TOTAL_VALUE")?,
            None => {
                return Err(CoreError::validation(
                    "MISSING_TOTAL_VALUE",
                    "Total value is required and must be a number",
                ))
            }
        };
        let order_status = match self.order_status {
            Some(ref v) => {
                validation::one_of(v, ORDER_STATUSES, "Order status", "INVALID_ORDER_STATUS")?
            }
            None => DEFAULT_ORDER_STATUS.to_string(),
        };

        Ok(NewOrder {
            property_id,
            buyer_name,
            buyer_email,
            buyer_phone,
            buyer_address,
            buyer_city,
            buyer_state,
            buyer_zip_code,
            inquiry_type,
            preferred_contact_time,
            additional_notes: normalize_notes(self.additional_notes),
            order_status,
            total_value,
        })
    }
}

impl UpdateOrder {
    pub fn validate(self) -> Result<OrderPatch, CoreError> {
        let mut patch = OrderPatch::default();

        patch.property_id = self.property_id;
        if let Some(ref v) = self.buyer_name {
            patch.buyer_name = Some(validation::non_empty(v, "Buyer name", "INVALID_BUYER_NAME")?);
        }
        if let Some(ref v) = self.buyer_email {
            patch.buyer_email = Some(validation::email(
                v,
                "Buyer email",
                "INVALID_BUYER_EMAIL",
                "INVALID_EMAIL",
            )?);
        }
        if let Some(ref v) = self.buyer_phone {
            patch.buyer_phone =
                Some(validation::non_empty(v, "Buyer phone", "INVALID_BUYER_PHONE")?);
        }
        if let Some(ref v) = self.buyer_address {
            patch.buyer_address =
                Some(validation::non_empty(v, "Buyer address", "INVALID_BUYER_ADDRESS")?);
        }
        if let Some(ref v) = self.buyer_city {
            patch.buyer_city = Some(validation::non_empty(v, "Buyer city", "INVALID_BUYER_CITY")?);
        }
        if let Some(ref v) = self.buyer_state {
            patch.buyer_state =
                Some(validation::non_empty(v, "Buyer state", "INVALID_BUYER_STATE")?);
        }
        if let Some(ref v) = self.buyer_zip_code {
            patch.buyer_zip_code = Some(validation::non_empty(
                v,
                "Buyer zip code",
                "INVALID_BUYER_ZIP_CODE",
            )?);
        }
        if let Some(ref v) = self.inquiry_type {
            patch.inquiry_type = Some(validation::one_of(
                v,
                INQUIRY_TYPES,
                "Inquiry type",
                "INVALID_INQUIRY_TYPE",
            )?);
        }
        if let Some(ref v) = self.preferred_contact_time {
            patch.preferred_contact_time = Some(validation::non_empty(
                v,
                "Preferred contact time",
                "INVALID_PREFERRED_CONTACT_TIME",
            )?);
        }
        if let Some(ref v) = self.order_status {
            patch.order_status = Some(validation::one_of(
                v,
                ORDER_STATUSES,
                "Order status",
                "INVALID_ORDER_STATUS",
            )?);
        }
        if let Some(v) = self.total_value {
            patch.total_value =
                Some(validation::positive_i64(v, "Total value", "INVALID_TOTAL_VALUE")?);
        }
        if self.additional_notes.is_some() {
            patch.additional_notes = normalize_notes(self.additional_notes);
        }

        Ok(patch)
    }
}

/// Typed filter for listing orders.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<String>,
    pub property_id: Option<DbId>,
}

fn require(value: &Option<String>, field: &str, code: &str) -> Result<String, CoreError> {
    match value {
        Some(v) => validation::non_empty(v, field, code),
        None => Err(CoreError::validation(code, format!("{field} is required"))),
    }
}

/// Blank notes are stored as NULL rather than empty text.
fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_create(property_id: DbId) -> CreateOrder {
        CreateOrder {
            property_id: Some(property_id),
            buyer_name: Some("Jane Buyer".into()),
            buyer_email: Some(" Jane@Example.com ".into()),
            buyer_phone: Some("555-0100".into()),
            buyer_address: Some("1 Main St".into()),
            buyer_city: Some("Austin".into()),
            buyer_state: Some("TX".into()),
            buyer_zip_code: Some("78701".into()),
            inquiry_type: Some("viewing".into()),
            preferred_contact_time: Some("mornings".into()),
            additional_notes: Some("   ".into()),
            order_status: None,
            total_value: Some(500_000),
        }
    }

    #[test]
    fn create_normalizes_email_and_notes() {
        let order = full_create(1).validate().unwrap();
        assert_eq!(order.buyer_email, "jane@example.com");
        assert_eq!(order.additional_notes, None);
        assert_eq!(order.order_status, "pending");
    }

    #[test]
    fn create_rejects_bad_inquiry_type() {
        let mut req = full_create(1);
        req.inquiry_type = Some("teleport".into());
        match req.validate() {
            Err(CoreError::Validation { code, .. }) => assert_eq!(code, "INVALID_INQUIRY_TYPE"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn update_rejects_bad_status() {
        let req = UpdateOrder {
            order_status: Some("misplaced".into()),
            ..Default::default()
        };
        match req.validate() {
            Err(CoreError::Validation { code, .. }) => assert_eq!(code, "INVALID_ORDER_STATUS"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
