pub mod api;
pub mod config;
pub mod database;
pub mod schemas;
pub mod server;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
