pub mod config;
pub mod delete;
