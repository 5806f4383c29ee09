//! Measurement Details UI Module (MVVM Standard)

mod model;
mod view;
mod view_model;

pub use view::MeasurementDetails;
pub use view_model::MeasurementDetailsVm;
