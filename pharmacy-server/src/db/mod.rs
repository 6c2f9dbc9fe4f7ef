//! Database layer - pool, schema lifecycle, seed data and repositories
//!
//! # Startup sequence
//!
//! reset (drop) → build (create) → seed (insert), all on one pooled
//! connection. See [`bootstrap::run`].

pub mod bootstrap;
pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod seed;

pub use bootstrap::{BootstrapError, BootstrapStep};
pub use error::{ConstraintKind, DbError};
pub use pool::{create_lazy_pool, create_pool};
pub use repos::{MedicineRepo, TableRepo};
pub use seed::{SeedReport, TableOutcome};
