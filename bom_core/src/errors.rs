//! # Error Types
//!
//! Structured error types for bom_core. Validation errors name the offending
//! field so a form or API client can point the user straight at it.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height_mm: f64) -> CalcResult<()> {
//!     if height_mm <= 0.0 {
//!         return Err(CalcError::invalid_dimension(
//!             "height",
//!             height_mm.to_string(),
//!             "Height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = validate_height(0.0).unwrap_err();
//! assert_eq!(err.field(), Some("height"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bom_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and project operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A length, width, height or thickness is not usable
    #[error("Invalid dimension '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// Door type is not one of STANDARD, BIFOLD, AWNING
    #[error("Invalid door type '{value}': expected STANDARD, BIFOLD or AWNING")]
    InvalidDoorType { value: String },

    /// More than one validation problem was found in a single request
    #[error("Request rejected with {} validation errors: {}", .errors.len(), join_messages(.errors))]
    ValidationFailed { errors: Vec<CalcError> },

    /// A fabrication setting is out of range
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSetting {
        field: String,
        value: String,
        reason: String,
    },

    /// No project item carries the requested label
    #[error("No item labelled '{label}' in project")]
    ItemNotFound { label: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

fn join_messages(errors: &[CalcError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl CalcError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidDoorType error
    pub fn invalid_door_type(value: impl Into<String>) -> Self {
        CalcError::InvalidDoorType { value: value.into() }
    }

    /// Create an InvalidSetting error
    pub fn invalid_setting(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidSetting {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        CalcError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Create a SerializationError from anything displayable
    pub fn serialization(reason: impl std::fmt::Display) -> Self {
        CalcError::SerializationError {
            reason: reason.to_string(),
        }
    }

    /// Collapse a list of validation problems into one error.
    ///
    /// Returns `None` for an empty list, the error itself for a single
    /// problem, and `ValidationFailed` otherwise.
    pub fn from_issues(mut issues: Vec<CalcError>) -> Option<Self> {
        match issues.len() {
            0 => None,
            1 => issues.pop(),
            _ => Some(CalcError::ValidationFailed { errors: issues }),
        }
    }

    /// Name of the offending input field, if this error concerns one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidDimension { field, .. } | CalcError::InvalidSetting { field, .. } => Some(field.as_str()),
            CalcError::InvalidDoorType { .. } => Some("door_type"),
            _ => None,
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidDimension { .. } => "INVALID_DIMENSION",
            CalcError::InvalidDoorType { .. } => "INVALID_DOOR_TYPE",
            CalcError::ValidationFailed { .. } => "VALIDATION_FAILED",
            CalcError::InvalidSetting { .. } => "INVALID_SETTING",
            CalcError::ItemNotFound { .. } => "ITEM_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::FileLocked { .. } => "FILE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_dimension("length", "0", "Length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidDimension\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_door_type("SLIDING").error_code(), "INVALID_DOOR_TYPE");
        assert_eq!(
            CalcError::ItemNotFound { label: "x".into() }.error_code(),
            "ITEM_NOT_FOUND"
        );
    }

    #[test]
    fn test_from_issues() {
        assert!(CalcError::from_issues(vec![]).is_none());

        let single = CalcError::from_issues(vec![CalcError::invalid_dimension("width", "-1", "bad")]).unwrap();
        assert_eq!(single.field(), Some("width"));

        let many = CalcError::from_issues(vec![
            CalcError::invalid_dimension("width", "-1", "bad"),
            CalcError::invalid_dimension("height", "0", "bad"),
        ])
        .unwrap();
        match &many {
            CalcError::ValidationFailed { errors } => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
        let message = many.to_string();
        assert!(message.contains("width"));
        assert!(message.contains("height"));
    }

    #[test]
    fn test_only_lock_is_recoverable() {
        assert!(CalcError::file_locked("a.fwp", "someone", "now").is_recoverable());
        assert!(!CalcError::invalid_door_type("x").is_recoverable());
    }
}
