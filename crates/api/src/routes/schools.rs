//! School management routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{CreateSchoolRequest, School, SchoolSummary, UpdateSchoolRequest};
use persistence::repositories::SchoolRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// List all schools as `{id, name}` summaries, ordered by ascending id.
///
/// GET /api/schools
pub async fn list_school_summaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<SchoolSummary>>, ApiError> {
    let repo = SchoolRepository::new(state.pool.clone());
    let summaries = repo.list_summaries().await?;
    Ok(Json(summaries))
}

/// Create a new school.
///
/// POST /api/schools
pub async fn create_school(
    State(state): State<AppState>,
    Json(request): Json<CreateSchoolRequest>,
) -> Result<(StatusCode, Json<School>), ApiError> {
    request.validate()?;

    let repo = SchoolRepository::new(state.pool.clone());
    let school = repo.create(&request).await?;

    info!(school_id = school.id, school_name = %school.name, "School created");

    Ok((StatusCode::CREATED, Json(school.into())))
}

/// Fetch a single school.
///
/// GET /api/schools/:id
pub async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<School>, ApiError> {
    let repo = SchoolRepository::new(state.pool.clone());
    let school = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("School {} not found", id)))?;

    Ok(Json(school.into()))
}

/// Update an existing school.
///
/// PUT /api/schools/:id
pub async fn update_school(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateSchoolRequest>,
) -> Result<Json<School>, ApiError> {
    request.validate()?;

    let repo = SchoolRepository::new(state.pool.clone());
    let school = repo.update(id, &request).await?;

    info!(school_id = school.id, "School updated");

    Ok(Json(school.into()))
}

/// Delete a school and, via cascade, all of its students.
///
/// DELETE /api/schools/:id
pub async fn delete_school(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = SchoolRepository::new(state.pool.clone());
    repo.delete(id).await?;

    info!(school_id = id, "School deleted");

    Ok(StatusCode::NO_CONTENT)
}
