pub mod navigation;
pub mod templates;
pub mod views;
