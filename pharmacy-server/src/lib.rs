//! pharmacy-server: pharmacy inventory demo over PostgreSQL
//!
//! Resets and seeds a five-table schema at startup, then serves the
//! stocked drugs as JSON next to a static landing page.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DbConfig;
pub use http::{run_server, ApiError, ServerConfig};
