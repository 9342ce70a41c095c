//! Shared domain primitives for the haven marketplace.
//!
//! Holds the types, error enum, enum literal sets, and pure field
//! validators used by both the server crates and the client store.

pub mod domain;
pub mod error;
pub mod types;
pub mod validation;
