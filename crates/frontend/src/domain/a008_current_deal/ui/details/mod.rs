//! Current Deal Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: CurrentDealDetailsVm with the form signal
//! - view.rs: CurrentDealDetails form component

mod model;
mod view;
mod view_model;

pub use view::CurrentDealDetails;
pub use view_model::CurrentDealDetailsVm;
