//! Spotlight Details UI Module (MVVM Standard)
//!
//! Two uploads per save: the background travels as the form attachment,
//! the brand logo in its own slot.

mod model;
mod view;
mod view_model;

pub use view::SpotlightDetails;
pub use view_model::SpotlightDetailsVm;
