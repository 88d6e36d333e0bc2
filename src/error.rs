//! Error types for the rolodex contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised when a candidate value fails field validation.
///
/// Raised synchronously at the point of construction or mutation; a failed
/// write never replaces the previously held value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty or all whitespace
    #[error("name cannot be empty")]
    EmptyName,

    /// Phone is not exactly 10 decimal digits
    #[error("invalid phone number: {0:?} (expected exactly 10 digits)")]
    InvalidPhone(String),

    /// Birthday does not parse as a YYYY-MM-DD calendar date
    #[error("invalid birthday: {0:?} (expected YYYY-MM-DD)")]
    InvalidBirthday(String),
}

/// Errors raised by mutating operations on a [`Record`](crate::models::Record).
///
/// `PhoneNotFound` is distinct from `Validation` so callers can tell
/// "nothing to edit" apart from "bad replacement value".
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    /// Tried to edit a phone number that is not on the record
    #[error("phone {0} not found on record")]
    PhoneNotFound(String),

    /// The new value failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised while saving or loading the address book file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("address book I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a well-formed address book JSON document
    #[error("address book JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file parsed but a stored field fails validation
    #[error("address book contains invalid data: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
