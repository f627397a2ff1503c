pub mod config;
pub mod holiday;
pub mod record;
pub mod view;
