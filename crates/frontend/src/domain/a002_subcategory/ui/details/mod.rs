//! Subcategory Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: SubcategoryDetailsVm with the form signal
//! - view.rs: SubcategoryDetails form component

mod model;
mod view;
mod view_model;

pub use view::SubcategoryDetails;
pub use view_model::SubcategoryDetailsVm;
