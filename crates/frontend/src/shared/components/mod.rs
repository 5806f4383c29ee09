pub mod dependent_select;
pub mod image_picker;
pub mod multi_select_checklist;
pub mod page_header;
pub mod pagination_controls;
pub mod search_box;
pub mod ui;
