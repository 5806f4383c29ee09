pub mod aggregate;
pub mod form;

pub use aggregate::Measurement;
pub use form::{MeasurementFields, MeasurementForm};
