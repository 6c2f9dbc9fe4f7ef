//! Route handlers organized by resource

pub mod drugs;
pub mod health;
pub mod pages;
