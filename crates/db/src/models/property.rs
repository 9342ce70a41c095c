//! Property models and DTOs.
//!
//! The wire format is camelCase (`yearBuilt`, `createdAt`); the `type`
//! field keeps its reserved-word name on the wire and in the schema.

use haven_core::domain::{DEFAULT_PROPERTY_STATUS, PROPERTY_STATUSES, PROPERTY_TYPES};
use haven_core::error::CoreError;
use haven_core::types::{DbId, Timestamp};
use haven_core::validation;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `properties` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub location: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub property_type: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: i32,
    pub images: Json<Vec<String>>,
    pub featured: bool,
    pub status: String,
    pub amenities: Json<Vec<String>>,
    pub year_built: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Raw create payload. Every field is optional at the serde level so a
/// missing field surfaces the contract's `MISSING_*` code instead of a
/// generic body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProperty {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<i32>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub status: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub year_built: Option<i32>,
}

/// Fully-validated create payload, ready to insert.
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub location: String,
    pub property_type: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: i32,
    pub images: Vec<String>,
    pub featured: bool,
    pub status: String,
    pub amenities: Vec<String>,
    pub year_built: i32,
}

/// Raw partial-update payload; only supplied fields are validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProperty {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<i32>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub status: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub year_built: Option<i32>,
}

/// Validated partial update applied via COALESCE; `updated_at` is
/// always bumped regardless of which fields are present.
#[derive(Debug, Clone, Default)]
pub struct PropertyPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<i32>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub status: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub year_built: Option<i32>,
}

impl PropertyPatch {
    /// True when the payload carried no recognized field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.location.is_none()
            && self.property_type.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.area.is_none()
            && self.images.is_none()
            && self.featured.is_none()
            && self.status.is_none()
            && self.amenities.is_none()
            && self.year_built.is_none()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

impl CreateProperty {
    /// Validate every mandatory field; the first failure wins.
    pub fn validate(self) -> Result<NewProperty, CoreError> {
        let title = match self.title {
            Some(ref v) => validation::non_empty(v, "Title", "MISSING_TITLE")?,
            None => return Err(missing("Title", "MISSING_TITLE")),
        };
        let description = match self.description {
            Some(ref v) => validation::non_empty(v, "Description", "MISSING_DESCRIPTION")?,
            None => return Err(missing("Description", "MISSING_DESCRIPTION")),
        };
        let price = match self.price {
            Some(v) => validation::positive_i64(v, "Price", "INVALID_PRICE")?,
            None => return Err(missing_number("Price", "MISSING_PRICE")),
        };
        let location = match self.location {
            Some(ref v) => validation::non_empty(v, "Location", "MISSING_LOCATION")?,
            None => return Err(missing("Location", "MISSING_LOCATION")),
        };
        let property_type = match self.property_type {
            Some(ref v) => validation::one_of(v, PROPERTY_TYPES, "Type", "INVALID_TYPE")?,
            None => {
                return Err(CoreError::validation(
                    "MISSING_TYPE",
                    "Type is required".to_string(),
                ))
            }
        };
        let bedrooms = match self.bedrooms {
            Some(v) => validation::positive_i32(v, "Bedrooms", "INVALID_BEDROOMS")?,
            None => return Err(missing_number("Bedrooms", "MISSING_BEDROOMS")),
        };
        let bathrooms = match self.bathrooms {
            Some(v) => validation::positive_i32(v, "Bathrooms", "INVALID_BATHROOMS")?,
            None => return Err(missing_number("Bathrooms", "MISSING_BATHROOMS")),
        };
        let area = match self.area {
            Some(v) => validation::positive_i32(v, "Area", "INVALID_AREA")?,
            None => return Err(missing_number("Area", "MISSING_AREA")),
        };
        let images = self.images.ok_or_else(|| {
            CoreError::validation("MISSING_IMAGES", "Images is required and must be an array")
        })?;
        let amenities = self.amenities.ok_or_else(|| {
            CoreError::validation(
                "MISSING_AMENITIES",
                "Amenities is required and must be an array",
            )
        })?;
        let year_built = match self.year_built {
            Some(v) => validation::positive_i32(v, "Year built", "INVALID_YEAR_BUILT")?,
            None => return Err(missing_number("Year built", "MISSING_YEAR_BUILT")),
        };
        let status = match self.status {
            Some(ref v) => validation::one_of(v, PROPERTY_STATUSES, "Status", "INVALID_STATUS")?,
            None => DEFAULT_PROPERTY_STATUS.to_string(),
        };

        Ok(NewProperty {
            title,
            description,
            price,
            location,
            property_type,
            bedrooms,
            bathrooms,
            area,
            images,
            featured: self.featured.unwrap_or(false),
            status,
            amenities,
            year_built,
        })
    }
}

impl UpdateProperty {
    /// Validate only the fields present in the payload.
    pub fn validate(self) -> Result<PropertyPatch, CoreError> {
        let mut patch = PropertyPatch::default();

        if let Some(ref v) = self.title {
            patch.title = Some(validation::non_empty(v, "Title", "INVALID_TITLE")?);
        }
        if let Some(ref v) = self.description {
            patch.description =
                Some(validation::non_empty(v, "Description", "INVALID_DESCRIPTION")?);
        }
        if let Some(v) = self.price {
            patch.price = Some(validation::positive_i64(v, "Price", "INVALID_PRICE")?);
        }
        if let Some(ref v) = self.location {
            patch.location = Some(validation::non_empty(v, "Location", "INVALID_LOCATION")?);
        }
        if let Some(ref v) = self.property_type {
            patch.property_type =
                Some(validation::one_of(v, PROPERTY_TYPES, "Type", "INVALID_TYPE")?);
        }
        if let Some(v) = self.bedrooms {
            patch.bedrooms = Some(validation::positive_i32(v, "Bedrooms", "INVALID_BEDROOMS")?);
        }
        if let Some(v) = self.bathrooms {
            patch.bathrooms =
                Some(validation::positive_i32(v, "Bathrooms", "INVALID_BATHROOMS")?);
        }
        if let Some(v) = self.area {
            patch.area = Some(validation::positive_i32(v, "Area", "INVALID_AREA")?);
        }
        if let Some(ref v) = self.status {
            patch.status =
                Some(validation::one_of(v, PROPERTY_STATUSES, "Status", "INVALID_STATUS")?);
        }
        if let Some(v) = self.year_built {
            patch.year_built =
                Some(validation::positive_i32(v, "Year built", "INVALID_YEAR_BUILT")?);
        }
        patch.images = self.images;
        patch.amenities = self.amenities;
        patch.featured = self.featured;

        Ok(patch)
    }
}

// ---------------------------------------------------------------------------
// Typed list filter
// ---------------------------------------------------------------------------

/// Typed filter for listing properties. All fields combine with AND;
/// the free-text `search` is an OR across title/description/location.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    pub search: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub min_bedrooms: Option<i32>,
    pub min_bathrooms: Option<i32>,
    pub status: Option<String>,
    pub featured: Option<bool>,
}

fn missing(field: &str, code: &str) -> CoreError {
    CoreError::validation(code, format!("{field} is required and must be a non-empty string"))
}

fn missing_number(field: &str, code: &str) -> CoreError {
    CoreError::validation(code, format!("{field} is required and must be a number"))
}
