pub mod aggregate;
pub mod form;

pub use aggregate::{IdRef, MeasurementMapping};
pub use form::{MappingFields, MappingForm, MappingFormError, MeasurementMappingDto};
