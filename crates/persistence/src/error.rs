//! Store error taxonomy.

use thiserror::Error;

/// Failures reported by the persistence gateway.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The targeted row does not exist.
    #[error("Row not found")]
    NotFound,

    /// A write would violate a uniqueness or referential constraint.
    ///
    /// The store-level constraint is the source of truth; there is no
    /// pre-check, so two racing writes are decided by the store.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Any other driver-level failure.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) => match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    StoreError::ConstraintViolation(db_err.message().to_string())
                }
                sqlx::error::ErrorKind::ForeignKeyViolation => {
                    StoreError::ConstraintViolation(db_err.message().to_string())
                }
                _ => StoreError::Database(sqlx::Error::Database(db_err)),
            },
            other => StoreError::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, StoreError::NotFound));
    }

    #[test]
    fn test_protocol_error_maps_to_database() {
        let error: StoreError = sqlx::Error::Protocol("boom".to_string()).into();
        assert!(matches!(error, StoreError::Database(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", StoreError::NotFound), "Row not found");
        assert_eq!(
            format!("{}", StoreError::ConstraintViolation("schools.name".to_string())),
            "Constraint violation: schools.name"
        );
    }
}
