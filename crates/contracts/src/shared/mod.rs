pub mod attachment;
pub mod dependent_selection;
pub mod form_draft;
pub mod list;
pub mod local_patch;
pub mod serde_utils;
pub mod validation;
