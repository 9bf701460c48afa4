//! Demo-data seeding.
//!
//! Run once at startup: creates the schema if absent and, when the
//! school table is empty, inserts the fixed demo dataset of 10 schools
//! and 20 students. The check-then-seed is not atomic across processes;
//! the service starts once per process.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::StoreError;
use crate::schema::ensure_schema;

/// Fixed demo schools: (name, principal, address).
const DEMO_SCHOOLS: &[(&str, &str, &str)] = &[
    ("Green Valley High", "Alice Johnson", "12 Green St"),
    ("Riverside Secondary", "Bob Martin", "34 River Rd"),
    ("Mountainview School", "Clara Lee", "56 Hill Ave"),
    ("Lakeside Academy", "Daniel Kim", "78 Lake Blvd"),
    ("Sunset High", "Eva Brown", "90 Sunset Dr"),
    ("Maple Leaf School", "Frank Green", "101 Maple St"),
    ("Oakridge High", "Grace White", "202 Oak Rd"),
    ("Pinecrest Academy", "Henry Black", "303 Pine Ln"),
    ("Cedar Grove", "Ivy Adams", "404 Cedar Ct"),
    ("Hillside High", "Jackie Chen", "505 Hilltop Rd"),
];

/// Fixed demo students: (full_name, student_identifier, email, phone).
/// Each student is assigned round-robin to one of the demo schools in
/// insertion order.
const DEMO_STUDENTS: &[(&str, &str, &str, &str)] = &[
    ("Liam Smith", "S10001", "liam.smith@example.com", "0123456789"),
    ("Emma Johnson", "S10002", "emma.johnson@example.com", "0123456790"),
    ("Noah Williams", "S10003", "noah.williams@example.com", "0123456791"),
    ("Olivia Brown", "S10004", "olivia.brown@example.com", "0123456792"),
    ("William Jones", "S10005", "william.jones@example.com", "0123456793"),
    ("Ava Garcia", "S10006", "ava.garcia@example.com", "0123456794"),
    ("James Miller", "S10007", "james.miller@example.com", "0123456795"),
    ("Isabella Davis", "S10008", "isabella.davis@example.com", "0123456796"),
    ("Benjamin Martinez", "S10009", "benjamin.martinez@example.com", "0123456797"),
    ("Sophia Hernandez", "S10010", "sophia.hernandez@example.com", "0123456798"),
    ("Lucas Lopez", "S10011", "lucas.lopez@example.com", "0123456799"),
    ("Mia Gonzalez", "S10012", "mia.gonzalez@example.com", "0123456800"),
    ("Mason Wilson", "S10013", "mason.wilson@example.com", "0123456801"),
    ("Charlotte Anderson", "S10014", "charlotte.anderson@example.com", "0123456802"),
    ("Ethan Thomas", "S10015", "ethan.thomas@example.com", "0123456803"),
    ("Amelia Taylor", "S10016", "amelia.taylor@example.com", "0123456804"),
    ("Alexander Moore", "S10017", "alex.moore@example.com", "0123456805"),
    ("Harper Jackson", "S10018", "harper.jackson@example.com", "0123456806"),
    ("Michael Martin", "S10019", "michael.martin@example.com", "0123456807"),
    ("Evelyn Lee", "S10020", "evelyn.lee@example.com", "0123456808"),
];

/// Idempotent startup routine: ensure the schema exists and seed the
/// demo dataset when the store holds no schools.
pub async fn ensure_schema_and_seed(pool: &SqlitePool) -> Result<(), StoreError> {
    ensure_schema(pool).await?;

    let school_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM schools")
        .fetch_one(pool)
        .await?;

    if school_count > 0 {
        info!(school_count, "Store already populated, skipping seed");
        return Ok(());
    }

    let school_ids = seed_schools(pool).await?;
    seed_students(pool, &school_ids).await?;

    info!(
        schools = DEMO_SCHOOLS.len(),
        students = DEMO_STUDENTS.len(),
        "Seeded demo data"
    );
    Ok(())
}

/// Insert all demo schools in one transaction, returning their assigned
/// ids in insertion order.
async fn seed_schools(pool: &SqlitePool) -> Result<Vec<i64>, StoreError> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let mut ids = Vec::with_capacity(DEMO_SCHOOLS.len());
    for (name, principal, address) in DEMO_SCHOOLS {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO schools (name, principal, address, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(principal)
        .bind(address)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;
        ids.push(id);
    }

    tx.commit().await?;
    Ok(ids)
}

/// Insert all demo students in one transaction. Schools are committed
/// first because student rows need resolved school ids.
async fn seed_students(pool: &SqlitePool, school_ids: &[i64]) -> Result<(), StoreError> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    for (i, (full_name, identifier, email, phone)) in DEMO_STUDENTS.iter().enumerate() {
        let school_id = school_ids[i % school_ids.len()];
        sqlx::query(
            r#"
            INSERT INTO students (school_id, full_name, student_identifier, email, phone, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(school_id)
        .bind(full_name)
        .bind(identifier)
        .bind(email)
        .bind(phone)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dataset_sizes() {
        assert_eq!(DEMO_SCHOOLS.len(), 10);
        assert_eq!(DEMO_STUDENTS.len(), 20);
    }

    #[test]
    fn test_demo_schools_have_unique_names() {
        let mut names: Vec<_> = DEMO_SCHOOLS.iter().map(|(name, _, _)| name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), DEMO_SCHOOLS.len());
    }

    #[test]
    fn test_demo_students_have_unique_identifiers_and_emails() {
        let mut identifiers: Vec<_> = DEMO_STUDENTS.iter().map(|(_, id, _, _)| id).collect();
        identifiers.sort();
        identifiers.dedup();
        assert_eq!(identifiers.len(), DEMO_STUDENTS.len());

        let mut emails: Vec<_> = DEMO_STUDENTS.iter().map(|(_, _, email, _)| email).collect();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), DEMO_STUDENTS.len());
    }

    #[test]
    fn test_demo_phones_are_ten_digits() {
        for (_, _, _, phone) in DEMO_STUDENTS {
            assert_eq!(phone.len(), 10);
            assert!(phone.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
