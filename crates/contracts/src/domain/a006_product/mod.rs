pub mod aggregate;
pub mod pricing;
pub mod size_guide;
pub mod variant;

pub use aggregate::{product_name, MasterMaterial, MaterialPrice, Product, ProductDetail, ProductMaterial, ProductSize};
pub use pricing::{PriceDetails, PriceQuery, PriceQuote};
pub use size_guide::{MeasureGuide, SizeChart, SizeChartRow, SizeMeasure, Unit};
