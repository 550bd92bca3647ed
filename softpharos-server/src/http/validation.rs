//! Request validation
//!
//! Checks applied to create requests before they reach a service.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use softpharos_core::domain::Id;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Validation error for request bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field is shorter than its minimum length
    TooShort { field: &'static str, min: usize },

    /// Identifier must reference an existing row (> 0)
    NotPositive { field: &'static str },

    /// String doesn't match the required format
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters", field, min)
            }
            Self::NotPositive { field } => write!(f, "{} must be a positive integer", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

pub fn positive(field: &'static str, value: Id) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(())
}

pub fn min_len(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

pub fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    non_empty(field, value)?;
    if !EMAIL_RE.is_match(value) {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must be a valid email address",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooShort {
            field: "password",
            min: 6,
        };
        assert_eq!(err.to_string(), "password must be at least 6 characters");
    }

    #[test]
    fn blank_is_empty() {
        assert_eq!(
            non_empty("name", "   "),
            Err(ValidationError::Empty { field: "name" })
        );
        assert!(non_empty("name", "admin").is_ok());
    }

    #[test]
    fn ids_must_be_positive() {
        assert!(positive("project_id", 0).is_err());
        assert!(positive("project_id", -3).is_err());
        assert!(positive("project_id", 1).is_ok());
    }

    #[test]
    fn email_shapes() {
        assert!(email("email", "ana@example.com").is_ok());
        assert!(email("email", "ana.example.com").is_err());
        assert!(email("email", "ana@localhost").is_err());
        assert_eq!(email("email", ""), Err(ValidationError::Empty { field: "email" }));
    }

    #[test]
    fn length_counts_chars() {
        assert!(min_len("password", "ñandú1", 6).is_ok());
        assert!(min_len("password", "12345", 6).is_err());
    }
}
