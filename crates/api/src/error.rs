use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use persistence::StoreError;
use serde::Serialize;
use shared::validation::ValidationErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed")]
    Validation(ValidationErrorResponse),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Validation failures use the structured field → messages body.
            ApiError::Validation(body) => {
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::NotFound(msg) => error_body(StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => error_body(StatusCode::CONFLICT, "conflict", msg),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                )
            }
        }
    }
}

fn error_body(status: StatusCode, error_code: &str, message: String) -> Response {
    let body = ErrorBody {
        error: error_code.into(),
        message,
    };
    (status, Json(body)).into_response()
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound("Resource not found".into()),
            StoreError::ConstraintViolation(msg) => {
                ApiError::Conflict(format!("Constraint violation: {}", msg))
            }
            StoreError::Database(err) => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(ValidationErrorResponse::from(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let response = ApiError::NotFound("resource not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status() {
        let response = ApiError::Conflict("already exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_status() {
        let body = ValidationErrorResponse::from_field_errors(Default::default());
        let response = ApiError::Validation(body).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_status() {
        let response = ApiError::Internal("database connection failed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_store_not_found() {
        let error: ApiError = StoreError::NotFound.into();
        assert!(matches!(error, ApiError::NotFound(_)));
    }

    #[test]
    fn test_from_store_constraint_violation() {
        let error: ApiError = StoreError::ConstraintViolation("schools.name".to_string()).into();
        match error {
            ApiError::Conflict(msg) => assert!(msg.contains("schools.name")),
            _ => panic!("Expected Conflict error"),
        }
    }

    #[test]
    fn test_from_validation_errors() {
        let mut errors = validator::ValidationErrors::new();
        let mut field_error = validator::ValidationError::new("email");
        field_error.message = Some("Email is invalid".into());
        errors.add("email", field_error);

        let error: ApiError = errors.into();
        match error {
            ApiError::Validation(body) => {
                assert_eq!(body.message, "Validation failed");
                assert_eq!(body.errors["email"], vec!["Email is invalid"]);
            }
            _ => panic!("Expected Validation error"),
        }
    }
}
