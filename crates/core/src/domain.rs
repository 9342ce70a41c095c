//! Fixed literal sets for enum-typed fields.
//!
//! These stay string-based (rather than Rust enums deserialized by serde)
//! so that membership failures surface the contract's field-specific
//! error codes instead of a generic body rejection.

/// Allowed values for `Property.type`.
pub const PROPERTY_TYPES: &[&str] = &["house", "apartment", "condo", "land", "commercial"];

/// Allowed values for `Property.status`.
pub const PROPERTY_STATUSES: &[&str] = &["available", "sold", "pending"];

/// Default `Property.status` when the create payload omits it.
pub const DEFAULT_PROPERTY_STATUS: &str = "available";

/// Allowed values for `Order.inquiryType`.
pub const INQUIRY_TYPES: &[&str] = &["viewing", "offer", "information", "financing"];

/// Allowed values for `Order.orderStatus`.
pub const ORDER_STATUSES: &[&str] = &[
    "pending",
    "contacted",
    "viewing_scheduled",
    "completed",
    "cancelled",
];

/// Default `Order.orderStatus` when the create payload omits it.
pub const DEFAULT_ORDER_STATUS: &str = "pending";

/// Allowed values for `Inquiry.status`.
pub const INQUIRY_STATUSES: &[&str] = &["new", "read", "responded", "closed"];

/// Default `Inquiry.status` when the create payload omits it.
pub const DEFAULT_INQUIRY_STATUS: &str = "new";
