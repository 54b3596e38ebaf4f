pub mod analysis;
pub mod notification;
