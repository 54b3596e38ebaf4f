pub mod analyze;
pub mod media_type;
pub mod render;
