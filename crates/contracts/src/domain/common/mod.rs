//! Common types and traits for all entities

pub mod resource;
pub mod vendor_product;

// Re-exports
pub use resource::{BodyEncoding, HttpMethod, Resource, Route};
