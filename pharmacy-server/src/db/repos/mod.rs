//! Repository implementations for database access
//!
//! Repositories borrow the pool; each query acquires and releases its own
//! pooled connection.

pub mod medicine;
pub mod tables;

pub use medicine::MedicineRepo;
pub use tables::TableRepo;
