pub mod aggregate;
pub mod filter;

pub use aggregate::Vendor;
pub use filter::VendorFilter;
