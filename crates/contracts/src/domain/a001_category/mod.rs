pub mod aggregate;
pub mod form;

pub use aggregate::Category;
pub use form::{CategoryFields, CategoryForm};
