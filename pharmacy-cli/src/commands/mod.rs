//! Command implementations for the pharmacy CLI

pub mod db_args;
pub mod seed;
pub mod serve;

pub use seed::run_seed;
pub use serve::run_serve;
