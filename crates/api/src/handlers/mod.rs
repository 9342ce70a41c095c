//! HTTP handlers, one module per resource.

use haven_core::error::CoreError;
use haven_core::types::DbId;
use haven_db::repositories::PropertyRepo;

use crate::error::AppError;
use crate::state::AppState;

pub mod cart;
pub mod favorite;
pub mod inquiry;
pub mod order;
pub mod property;

/// Verify a referenced property exists before writing a dependent row.
///
/// The FK is only a backstop; a dangling reference is reported as 404
/// `PROPERTY_NOT_FOUND` before anything is written.
pub(crate) async fn ensure_property_exists(
    state: &AppState,
    property_id: DbId,
) -> Result<(), AppError> {
    if property_id <= 0 {
        return Err(AppError::Core(CoreError::validation(
            "INVALID_PROPERTY_ID",
            "Property ID must be a positive number".to_string(),
        )));
    }
    if !PropertyRepo::exists(&state.pool, property_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id: property_id,
        }));
    }
    Ok(())
}
