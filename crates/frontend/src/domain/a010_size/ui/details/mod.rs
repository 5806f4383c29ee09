//! Size Details UI Module (MVVM Standard)
//!
//! A single text field, so the form state is plain signals instead of a `FormDraft`.

mod model;
mod view;
mod view_model;

pub use view::SizeDetails;
pub use view_model::SizeDetailsVm;
