pub mod aggregate;
pub mod form;

pub use aggregate::CurrentDeal;
pub use form::{CurrentDealDto, CurrentDealForm};
