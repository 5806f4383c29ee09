pub mod approval_status;
pub mod category_type;
pub mod gender;
pub mod vendor_type;

pub use approval_status::ApprovalStatus;
pub use category_type::CategoryType;
pub use gender::Gender;
pub use vendor_type::VendorType;
