//! School domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents a school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct School {
    pub id: i64,
    pub name: String,
    pub principal: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a school.
///
/// Timestamps are not part of the payload; the persistence layer stamps
/// them on every write.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateSchoolRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Name must be between 1 and 200 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Principal must be between 1 and 200 characters"
    ))]
    pub principal: String,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Address must be between 1 and 500 characters"
    ))]
    pub address: String,
}

/// Request payload for updating a school.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateSchoolRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Name must be between 1 and 200 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Principal must be between 1 and 200 characters"
    ))]
    pub principal: String,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Address must be between 1 and 500 characters"
    ))]
    pub address: String,
}

/// Minimal school projection for the summary listing.
///
/// `GET /api/schools` returns exactly these two fields per school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchoolSummary {
    pub id: i64,
    pub name: String,
}
