pub mod a001_category;
pub mod a002_subcategory;
pub mod a003_measurement;
pub mod a004_measurement_mapping;
pub mod a005_vendor;
pub mod a006_product;
pub mod a007_designer;
pub mod a008_current_deal;
pub mod a009_super_save_deal;
pub mod a010_size;
pub mod a011_spotlight;
pub mod a012_customer;
pub mod a013_order;
