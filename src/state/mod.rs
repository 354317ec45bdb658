pub mod app_settings;
pub mod app_state;
pub mod messages;
pub mod navigation;
pub mod selection;
pub mod timer;
