//! Error types for learnhub.

use thiserror::Error;

/// Common error type for learnhub.
#[derive(Error, Debug)]
pub enum LearnError {
    /// Database error.
    ///
    /// Errors from sqlx are converted into this variant.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for LearnError {
    fn from(e: sqlx::Error) -> Self {
        LearnError::Database(e.to_string())
    }
}

/// Result type alias for learnhub operations.
pub type Result<T> = std::result::Result<T, LearnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = LearnError::Validation("name is required".to_string());
        assert_eq!(err.to_string(), "validation error: name is required");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = LearnError::NotFound("topic".to_string());
        assert_eq!(err.to_string(), "topic not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: LearnError = io_err.into();
        assert!(matches!(err, LearnError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: LearnError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, LearnError::Database(_)));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(LearnError::Config("bad".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
