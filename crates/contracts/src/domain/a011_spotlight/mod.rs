pub mod aggregate;
pub mod form;

pub use aggregate::{Spotlight, SpotlightMeta};
pub use form::{SpotlightFields, SpotlightForm};
