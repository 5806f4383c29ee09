//! Measurement Mapping Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: MappingDetailsVm with the form signal
//! - view.rs: MappingDetails form component

mod model;
mod view;
mod view_model;

pub use view::MappingDetails;
pub use view_model::MappingDetailsVm;
