//! School entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the schools table.
#[derive(Debug, Clone, FromRow)]
pub struct SchoolEntity {
    pub id: i64,
    pub name: String,
    pub principal: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SchoolEntity> for domain::models::School {
    fn from(entity: SchoolEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            principal: entity.principal,
            address: entity.address,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
