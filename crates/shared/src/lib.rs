//! Shared utilities and common types for the School Manager backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Field-level validation helpers
//! - Structured validation-error formatting

pub mod validation;
