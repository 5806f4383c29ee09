//! Product Details UI Module (MVVM Standard)
//!
//! Read-only storefront card: gallery, variant choice and the price of the
//! chosen material and size.
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: ProductDetailsVm with the variant resolver
//! - view.rs: ProductDetails component

mod model;
mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsVm;
