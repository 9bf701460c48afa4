//! HTTP API for the School Manager backend.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
