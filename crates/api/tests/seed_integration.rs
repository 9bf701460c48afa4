//! Integration tests for schema bootstrap and demo-data seeding.

mod common;

use axum::http::{Method, StatusCode};
use common::{create_test_pool, empty_request, parse_response_body, test_config};
use persistence::repositories::{SchoolRepository, StudentRepository};
use persistence::seed::ensure_schema_and_seed;
use school_manager_api::app::create_app;
use tower::ServiceExt;

#[tokio::test]
async fn test_seed_empty_store() {
    let pool = create_test_pool().await;
    ensure_schema_and_seed(&pool).await.unwrap();

    let schools = SchoolRepository::new(pool.clone());
    let students = StudentRepository::new(pool.clone());
    assert_eq!(schools.count().await.unwrap(), 10);
    assert_eq!(students.count().await.unwrap(), 20);
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let pool = create_test_pool().await;
    ensure_schema_and_seed(&pool).await.unwrap();
    ensure_schema_and_seed(&pool).await.unwrap();

    let schools = SchoolRepository::new(pool.clone());
    let students = StudentRepository::new(pool.clone());
    assert_eq!(schools.count().await.unwrap(), 10);
    assert_eq!(students.count().await.unwrap(), 20);
}

#[tokio::test]
async fn test_seed_skipped_on_populated_store() {
    let pool = create_test_pool().await;
    persistence::schema::ensure_schema(&pool).await.unwrap();

    let schools = SchoolRepository::new(pool.clone());
    let request = domain::models::CreateSchoolRequest {
        name: "Existing School".to_string(),
        principal: "Existing Principal".to_string(),
        address: "1 Existing St".to_string(),
    };
    schools.create(&request).await.unwrap();

    ensure_schema_and_seed(&pool).await.unwrap();

    assert_eq!(schools.count().await.unwrap(), 1);
    let students = StudentRepository::new(pool.clone());
    assert_eq!(students.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_seed_assigns_students_round_robin() {
    let pool = create_test_pool().await;
    ensure_schema_and_seed(&pool).await.unwrap();

    let schools = SchoolRepository::new(pool.clone());
    let students = StudentRepository::new(pool.clone());

    // 20 students over 10 schools in insertion order: two per school.
    for school in schools.list().await.unwrap() {
        let enrolled = students.list(Some(school.id)).await.unwrap();
        assert_eq!(enrolled.len(), 2, "school {} should have 2 students", school.name);
    }
}

#[tokio::test]
async fn test_seeded_summary_endpoint() {
    let pool = create_test_pool().await;
    ensure_schema_and_seed(&pool).await.unwrap();

    let app = create_app(test_config(), pool);
    let response = app
        .oneshot(empty_request(Method::GET, "/api/schools"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let schools = body.as_array().unwrap();
    assert_eq!(schools.len(), 10);

    assert_eq!(schools[0]["name"], "Green Valley High");
    assert_eq!(schools[9]["name"], "Hillside High");

    let mut previous_id = 0;
    for school in schools {
        let object = school.as_object().unwrap();
        assert_eq!(object.len(), 2, "summary objects carry only id and name");

        let id = school["id"].as_i64().unwrap();
        assert!(id > previous_id);
        previous_id = id;
    }
}
