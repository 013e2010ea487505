pub mod config;
pub mod data;
pub mod list_view;
pub mod notify;
