pub mod aggregate;
pub mod form;

pub use aggregate::SuperSaveDeal;
pub use form::{SuperSaveFields, SuperSaveForm};
