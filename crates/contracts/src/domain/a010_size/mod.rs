pub mod aggregate;
pub mod form;

pub use aggregate::Size;
pub use form::SizeDto;
