pub mod common;
pub mod food_analysis;
pub mod notification;
pub mod results_display;
pub mod upload_flow;
