//! Storage error shared by repositories and services
//!
//! Services hand this value back to the caller unchanged; classification
//! into HTTP statuses happens at the HTTP boundary.

use thiserror::Error;

/// Database error type
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = DbError::not_found("milestone", 999);
        assert_eq!(err.to_string(), "not found: milestone '999'");
        assert!(err.is_not_found());
    }

    #[test]
    fn sqlx_error_converts() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
        assert!(!err.is_not_found());
    }
}
