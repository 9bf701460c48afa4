//! Schema bootstrap.
//!
//! The schema is created on startup if absent, mirroring the original
//! ensure-created behavior rather than a migration history. All
//! statements are idempotent.

use sqlx::SqlitePool;

use crate::error::StoreError;

const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS schools (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        principal TEXT NOT NULL,
        address TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_schools_name ON schools (name)",
    r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        school_id INTEGER NOT NULL REFERENCES schools (id) ON DELETE CASCADE,
        full_name TEXT NOT NULL,
        student_identifier TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_students_identifier ON students (student_identifier)",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_students_email ON students (email)",
    "CREATE INDEX IF NOT EXISTS idx_students_school_id ON students (school_id)",
];

/// Creates both tables and their indexes if they do not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
