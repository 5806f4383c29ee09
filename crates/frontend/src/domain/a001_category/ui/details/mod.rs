//! Category Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: CategoryDetailsVm with the form signal
//! - view.rs: CategoryDetails form component

mod model;
mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsVm;
