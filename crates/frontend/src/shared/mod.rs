pub mod api_utils;
pub mod charts;
pub mod components;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
