//! Persistence layer for the School Manager backend.
//!
//! This crate contains:
//! - Database connection management
//! - Schema bootstrap and demo-data seeding
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod error;
pub mod repositories;
pub mod schema;
pub mod seed;

pub use error::StoreError;
