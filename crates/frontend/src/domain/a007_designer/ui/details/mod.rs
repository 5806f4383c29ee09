//! Designer Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: DesignerDetailsVm with the form signal
//! - view.rs: DesignerDetails form component

mod model;
mod view;
mod view_model;

pub use view::DesignerDetails;
pub use view_model::DesignerDetailsVm;
