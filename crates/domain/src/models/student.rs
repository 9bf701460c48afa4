//! Student domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static::lazy_static! {
    static ref PHONE_REGEX: regex::Regex = regex::Regex::new(r"^\d{10,11}$").unwrap();
}

/// Represents a student enrolled in a school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Student {
    pub id: i64,
    pub school_id: i64,
    pub full_name: String,
    pub student_identifier: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a student.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateStudentRequest {
    pub school_id: i64,

    #[validate(length(
        min = 2,
        max = 100,
        message = "Full name must be between 2 and 100 characters"
    ))]
    pub full_name: String,

    #[validate(length(
        min = 5,
        max = 20,
        message = "Student identifier must be between 5 and 20 characters"
    ))]
    pub student_identifier: String,

    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Phone must be 10 or 11 digits"))]
    pub phone: Option<String>,
}

/// Request payload for updating a student.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateStudentRequest {
    pub school_id: i64,

    #[validate(length(
        min = 2,
        max = 100,
        message = "Full name must be between 2 and 100 characters"
    ))]
    pub full_name: String,

    #[validate(length(
        min = 5,
        max = 20,
        message = "Student identifier must be between 5 and 20 characters"
    ))]
    pub student_identifier: String,

    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Phone must be 10 or 11 digits"))]
    pub phone: Option<String>,
}

/// Query parameters for listing students.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListStudentsQuery {
    pub school_id: Option<i64>,
}
