pub mod details;
pub mod lookup;
pub mod size_guide;
