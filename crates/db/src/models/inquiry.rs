//! Inquiry models and DTOs. An inquiry is a free-form contact message
//! tied to one property. Inquiries carry no `updated_at` column.

use haven_core::domain::{DEFAULT_INQUIRY_STATUS, INQUIRY_STATUSES};
use haven_core::error::CoreError;
use haven_core::types::{DbId, Timestamp};
use haven_core::validation;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `inquiries` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: DbId,
    pub property_id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// Raw create payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiry {
    pub property_id: Option<DbId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
}

/// Fully-validated create payload.
#[derive(Debug, Clone)]
pub struct NewInquiry {
    pub property_id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: String,
}

/// Raw partial-update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInquiry {
    pub property_id: Option<DbId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
}

/// Validated partial update.
#[derive(Debug, Clone, Default)]
pub struct InquiryPatch {
    pub property_id: Option<DbId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
}

impl InquiryPatch {
    pub fn is_empty(&self) -> bool {
        self.property_id.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.message.is_none()
            && self.status.is_none()
    }
}

impl CreateInquiry {
    pub fn validate(self) -> Result<NewInquiry, CoreError> {
        let property_id = self.property_id.ok_or_else(|| {
            CoreError::validation("MISSING_PROPERTY_ID", "propertyId is required")
        })?;
        let name = match self.name {
            Some(ref v) => validation::non_empty(v, "name", "MISSING_NAME")?,
            None => {
                return Err(CoreError::validation(
                    "MISSING_NAME",
                    "name is required and must be a non-empty string",
                ))
            }
        };
        let email = match self.email {
            Some(ref v) => validation::email(v, "email", "MISSING_EMAIL", "INVALID_EMAIL")?,
            None => {
                return Err(CoreError::validation(
                    "MISSING_EMAIL",
                    "email is required and must be a non-empty string",
                ))
            }
        };
        let phone = match self.phone {
            Some(ref v) => validation::non_empty(v, "phone", "MISSING_PHONE")?,
            None => {
                return Err(CoreError::validation(
                    "MISSING_PHONE",
                    "phone is required and must be a non-empty string",
                ))
            }
        };
        let message = match self.message {
            Some(ref v) => validation::non_empty(v, "message", "MISSING_MESSAGE")?,
            None => {
                return Err(CoreError::validation(
                    "MISSING_MESSAGE",
                    "message is required and must be a non-empty string",
                ))
            }
        };
        let status = match self.status {
            Some(ref v) => validation::one_of(v, INQUIRY_STATUSES, "status", "INVALID_STATUS")?,
            None => DEFAULT_INQUIRY_STATUS.to_string(),
        };

        Ok(NewInquiry {
            property_id,
            name,
            email,
            phone,
            message,
            status,
        })
    }
}

impl UpdateInquiry {
    pub fn validate(self) -> Result<InquiryPatch, CoreError> {
        let mut patch = InquiryPatch::default();

        patch.property_id = self.property_id;
        if let Some(ref v) = self.name {
            patch.name = Some(validation::non_empty(v, "name", "INVALID_NAME")?);
        }
        if let Some(ref v) = self.email {
            patch.email = Some(validation::email(v, "email", "INVALID_EMAIL", "INVALID_EMAIL")?);
        }
        if let Some(ref v) = self.phone {
            patch.phone = Some(validation::non_empty(v, "phone", "INVALID_PHONE")?);
        }
        if let Some(ref v) = self.message {
            patch.message = Some(validation::non_empty(v, "message", "INVALID_MESSAGE")?);
        }
        if let Some(ref v) = self.status {
            patch.status =
                Some(validation::one_of(v, INQUIRY_STATUSES, "status", "INVALID_STATUS")?);
        }

        Ok(patch)
    }
}

/// Typed filter for listing inquiries.
#[derive(Debug, Clone, Default)]
pub struct InquiryFilter {
    pub status: Option<String>,
    pub property_id: Option<DbId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_status_to_new() {
        let inquiry = CreateInquiry {
            property_id: Some(1),
            name: Some("Sam".into()),
            email: Some("sam@example.com".into()),
            phone: Some("555-0100".into()),
            message: Some("Is it still available?".into()),
            status: None,
        }
        .validate()
        .unwrap();
        assert_eq!(inquiry.status, "new");
    }

    #[test]
    fn update_rejects_unknown_status() {
        let req = UpdateInquiry {
            status: Some("archived".into()),
            ..Default::default()
        };
        match req.validate() {
            Err(CoreError::Validation { code, .. }) => assert_eq!(code, "INVALID_STATUS"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
