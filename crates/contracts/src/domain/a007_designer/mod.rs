pub mod aggregate;
pub mod form;

pub use aggregate::{Designer, DesignerMeta};
pub use form::{DesignerFields, DesignerForm};
