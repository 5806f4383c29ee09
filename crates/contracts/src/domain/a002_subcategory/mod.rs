pub mod aggregate;
pub mod form;

pub use aggregate::Subcategory;
pub use form::{SubcategoryFields, SubcategoryForm};
