//! Size chart and "how to measure" pictures of a product

mod model;
mod view;

pub use view::SizeGuide;
