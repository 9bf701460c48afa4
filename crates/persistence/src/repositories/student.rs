//! Student repository for database operations.

use chrono::Utc;
use domain::models::{CreateStudentRequest, UpdateStudentRequest};
use sqlx::SqlitePool;

use crate::entities::StudentEntity;
use crate::error::StoreError;

/// Repository for student-related database operations.
#[derive(Clone)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    /// Creates a new StudentRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a new student, stamping both timestamps to now.
    ///
    /// A `school_id` that references no school surfaces as a
    /// `ConstraintViolation` from the foreign key.
    pub async fn create(
        &self,
        request: &CreateStudentRequest,
    ) -> Result<StudentEntity, StoreError> {
        let now = Utc::now();
        let student = sqlx::query_as::<_, StudentEntity>(
            r#"
            INSERT INTO students (school_id, full_name, student_identifier, email, phone, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING id, school_id, full_name, student_identifier, email, phone, created_at, updated_at
            "#,
        )
        .bind(request.school_id)
        .bind(&request.full_name)
        .bind(&request.student_identifier)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(student)
    }

    /// Rewrite an existing student, refreshing `updated_at` and leaving
    /// `created_at` untouched.
    pub async fn update(
        &self,
        id: i64,
        request: &UpdateStudentRequest,
    ) -> Result<StudentEntity, StoreError> {
        let now = Utc::now();
        let student = sqlx::query_as::<_, StudentEntity>(
            r#"
            UPDATE students
            SET school_id = ?1, full_name = ?2, student_identifier = ?3, email = ?4, phone = ?5, updated_at = ?6
            WHERE id = ?7
            RETURNING id, school_id, full_name, student_identifier, email, phone, created_at, updated_at
            "#,
        )
        .bind(request.school_id)
        .bind(&request.full_name)
        .bind(&request.student_identifier)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        student.ok_or(StoreError::NotFound)
    }

    /// Delete a student.
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Find a student by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<StudentEntity>, StoreError> {
        let student = sqlx::query_as::<_, StudentEntity>(
            r#"
            SELECT id, school_id, full_name, student_identifier, email, phone, created_at, updated_at
            FROM students
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    /// List students ordered by ascending ID, optionally filtered by school.
    pub async fn list(&self, school_id: Option<i64>) -> Result<Vec<StudentEntity>, StoreError> {
        let students = if let Some(school_id) = school_id {
            sqlx::query_as::<_, StudentEntity>(
                r#"
                SELECT id, school_id, full_name, student_identifier, email, phone, created_at, updated_at
                FROM students
                WHERE school_id = ?1
                ORDER BY id ASC
                "#,
            )
            .bind(school_id)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, StudentEntity>(
                r#"
                SELECT id, school_id, full_name, student_identifier, email, phone, created_at, updated_at
                FROM students
                ORDER BY id ASC
                "#,
            )
            .fetch_all(&self.pool)
            .await?
        };

        Ok(students)
    }

    /// Count all students.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
