//! Client-side marketplace store.
//!
//! Mirrors a user's cart and favorites locally, with every mutation going
//! through the server first. The HTTP surface is behind the
//! [`api::MarketplaceApi`] trait so the store can be tested against an
//! in-memory double.

pub mod api;
pub mod error;
pub mod http;
pub mod identity;
pub mod store;

pub use api::MarketplaceApi;
pub use error::{CheckoutError, ClientError};
pub use http::HttpApi;
pub use store::{BuyerInfo, ClientStore};
