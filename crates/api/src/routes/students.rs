//! Student management routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{CreateStudentRequest, ListStudentsQuery, Student, UpdateStudentRequest};
use persistence::repositories::StudentRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// List students, optionally filtered by school.
///
/// GET /api/students?school_id=1
pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<ListStudentsQuery>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let repo = StudentRepository::new(state.pool.clone());
    let students = repo.list(query.school_id).await?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Create a new student.
///
/// POST /api/students
///
/// A `school_id` that references no existing school is rejected with a
/// conflict, as is a duplicate identifier or email.
pub async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    request.validate()?;

    let repo = StudentRepository::new(state.pool.clone());
    let student = repo.create(&request).await?;

    info!(
        student_id = student.id,
        school_id = student.school_id,
        "Student created"
    );

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Fetch a single student.
///
/// GET /api/students/:id
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, ApiError> {
    let repo = StudentRepository::new(state.pool.clone());
    let student = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Student {} not found", id)))?;

    Ok(Json(student.into()))
}

/// Update an existing student.
///
/// PUT /api/students/:id
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStudentRequest>,
) -> Result<Json<Student>, ApiError> {
    request.validate()?;

    let repo = StudentRepository::new(state.pool.clone());
    let student = repo.update(id, &request).await?;

    info!(student_id = student.id, "Student updated");

    Ok(Json(student.into()))
}

/// Delete a student.
///
/// DELETE /api/students/:id
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = StudentRepository::new(state.pool.clone());
    repo.delete(id).await?;

    info!(student_id = id, "Student deleted");

    Ok(StatusCode::NO_CONTENT)
}
