//! Super Save Deal Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: SuperSaveDetailsVm with the form signal
//! - view.rs: SuperSaveDetails form component

mod model;
mod view;
mod view_model;

pub use view::SuperSaveDetails;
pub use view_model::SuperSaveDetailsVm;
