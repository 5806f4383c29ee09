pub mod aggregate;

pub use aggregate::{Order, OrderCustomer};
