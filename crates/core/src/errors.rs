//! Core error types for Budgetbook.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::NaiveDate;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Date format accepted and produced for calendar dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Root error type for the budgeting backend.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when the error means the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Database(DatabaseError::NotFound(_)))
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate username).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|e| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "{field}: '{value}' is not a YYYY-MM-DD date ({e})"
        )))
    })
}

/// Unwraps a required request field, reporting its name when absent.
pub fn require<T>(field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::Validation(ValidationError::MissingField(field.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date("start_date", "2024-03-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_parse_iso_date_rejects_other_formats() {
        for bad in ["03/01/2024", "2024-13-01", "2024-02-30", "", "2024-03-01T00:00:00"] {
            let err = parse_iso_date("date", bad).unwrap_err();
            assert!(matches!(err, Error::Validation(ValidationError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_require_reports_field_name() {
        let err = require::<f64>("amount", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input validation failed: Required field 'amount' is missing"
        );
        assert_eq!(require("amount", Some(12.5)).unwrap(), 12.5);
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::Database(DatabaseError::NotFound("users".into())).is_not_found());
        assert!(!Error::Unexpected("boom".into()).is_not_found());
    }
}
