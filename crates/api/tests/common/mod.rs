//! Common test utilities for integration tests.
//!
//! Integration tests run against in-memory SQLite databases, so no
//! external services are needed.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::Router;
use school_manager_api::{
    app::create_app,
    config::{Config, DatabaseConfig, LoggingConfig, ServerConfig},
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Create a fresh in-memory test database pool.
///
/// A single connection is used so the in-memory database survives for
/// the whole test; every connection to `sqlite::memory:` would otherwise
/// get its own private database.
pub async fn create_test_pool() -> SqlitePool {
    let config = persistence::db::DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        connect_timeout_secs: 5,
        idle_timeout_secs: 600,
    };

    persistence::db::create_pool(&config)
        .await
        .expect("Failed to create test database pool")
}

/// Test configuration.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_secs: 5,
            idle_timeout_secs: 600,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
    }
}

/// Create a test application router with an empty, schema-ready store.
pub async fn create_test_app(pool: SqlitePool) -> Router {
    persistence::schema::ensure_schema(&pool)
        .await
        .expect("Failed to create schema");
    create_app(test_config(), pool)
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Build a bodyless request.
pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Parse a response body as JSON.
pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Response body is not valid JSON")
}

/// Create a school through the API and return the parsed response body.
pub async fn create_test_school(app: &Router, name: &str) -> Value {
    let request = json_request(
        Method::POST,
        "/api/schools",
        &serde_json::json!({
            "name": name,
            "principal": "Alice Johnson",
            "address": "12 Green St"
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    parse_response_body(response).await
}

/// Create a student through the API and return the parsed response body.
pub async fn create_test_student(
    app: &Router,
    school_id: i64,
    identifier: &str,
    email: &str,
) -> Value {
    let request = json_request(
        Method::POST,
        "/api/students",
        &serde_json::json!({
            "school_id": school_id,
            "full_name": "Liam Smith",
            "student_identifier": identifier,
            "email": email,
            "phone": "0123456789"
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    parse_response_body(response).await
}
