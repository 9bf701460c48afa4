//! Domain models for the School Manager backend.
//!
//! This crate defines the shape and validation rules of the School and
//! Student entities, independent of storage technology.

pub mod models;
