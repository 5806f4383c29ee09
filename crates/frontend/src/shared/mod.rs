pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod form_submit;
pub mod icons;
pub mod list_state;
pub mod page_frame;
pub mod session;
