pub mod access_control;
pub mod api_catalog;
pub mod config;
