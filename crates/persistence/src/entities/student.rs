//! Student entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the students table.
#[derive(Debug, Clone, FromRow)]
pub struct StudentEntity {
    pub id: i64,
    pub school_id: i64,
    pub full_name: String,
    pub student_identifier: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StudentEntity> for domain::models::Student {
    fn from(entity: StudentEntity) -> Self {
        Self {
            id: entity.id,
            school_id: entity.school_id,
            full_name: entity.full_name,
            student_identifier: entity.student_identifier,
            email: entity.email,
            phone: entity.phone,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
