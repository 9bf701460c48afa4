//! School repository for database operations.

use chrono::Utc;
use domain::models::{CreateSchoolRequest, SchoolSummary, UpdateSchoolRequest};
use sqlx::SqlitePool;

use crate::entities::SchoolEntity;
use crate::error::StoreError;

/// Repository for school-related database operations.
///
/// Timestamps are stamped here on every write; the request DTOs carry no
/// timestamp fields, so callers cannot supply their own.
#[derive(Clone)]
pub struct SchoolRepository {
    pool: SqlitePool,
}

impl SchoolRepository {
    /// Creates a new SchoolRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a new school, stamping both timestamps to now.
    pub async fn create(&self, request: &CreateSchoolRequest) -> Result<SchoolEntity, StoreError> {
        let now = Utc::now();
        let school = sqlx::query_as::<_, SchoolEntity>(
            r#"
            INSERT INTO schools (name, principal, address, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, name, principal, address, created_at, updated_at
            "#,
        )
        .bind(&request.name)
        .bind(&request.principal)
        .bind(&request.address)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(school)
    }

    /// Rewrite an existing school, refreshing `updated_at` and leaving
    /// `created_at` untouched.
    pub async fn update(
        &self,
        id: i64,
        request: &UpdateSchoolRequest,
    ) -> Result<SchoolEntity, StoreError> {
        let now = Utc::now();
        let school = sqlx::query_as::<_, SchoolEntity>(
            r#"
            UPDATE schools
            SET name = ?1, principal = ?2, address = ?3, updated_at = ?4
            WHERE id = ?5
            RETURNING id, name, principal, address, created_at, updated_at
            "#,
        )
        .bind(&request.name)
        .bind(&request.principal)
        .bind(&request.address)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        school.ok_or(StoreError::NotFound)
    }

    /// Delete a school. Dependent students are removed by the cascading
    /// foreign key in the same statement.
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM schools WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Find a school by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<SchoolEntity>, StoreError> {
        let school = sqlx::query_as::<_, SchoolEntity>(
            r#"
            SELECT id, name, principal, address, created_at, updated_at
            FROM schools
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(school)
    }

    /// List all schools ordered by ascending ID.
    pub async fn list(&self) -> Result<Vec<SchoolEntity>, StoreError> {
        let schools = sqlx::query_as::<_, SchoolEntity>(
            r#"
            SELECT id, name, principal, address, created_at, updated_at
            FROM schools
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(schools)
    }

    /// List `{id, name}` summaries ordered by ascending ID.
    pub async fn list_summaries(&self) -> Result<Vec<SchoolSummary>, StoreError> {
        let rows = sqlx::query_as::<_, (i64, String)>(
            "SELECT id, name FROM schools ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| SchoolSummary { id, name })
            .collect())
    }

    /// Count all schools.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM schools")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
