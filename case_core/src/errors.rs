//! # Error Types
//!
//! Structured error types for case_core. The dimensional engine itself is a
//! total function over positive input and never fails; these errors belong to
//! the boundary: parsing nominal plywood sizes, grid specs and baseplate
//! styles, validating configs, and reading or writing files.
//!
//! ## Example
//!
//! ```rust
//! use case_core::errors::{CalcError, CalcResult};
//!
//! fn validate_margin(margin_mm: f64) -> CalcResult<()> {
//!     if margin_mm < 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "margin_mm".to_string(),
//!             value: margin_mm.to_string(),
//!             reason: "Margin cannot be negative".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for case_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for input validation and file operations.
///
/// Each variant carries the offending value so callers can report it back
/// verbatim.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Plywood nominal size not in the thickness table
    #[error("Unknown plywood size '{value}'. Valid: {valid}")]
    UnknownPlywood { value: String, valid: String },

    /// Baseplate style outside the closed thin/standard/weighted set
    #[error("Unknown baseplate style '{value}'. Valid: thin, standard, weighted")]
    UnknownBaseplateStyle { value: String },

    /// Grid spec string not of the form `<X>x<Y>x<Z>`
    #[error("Invalid grid format '{value}'. Use XxYxZ format, e.g., 6x4x3")]
    InvalidGridSpec { value: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownPlywood error
    pub fn unknown_plywood(value: impl Into<String>, valid: impl Into<String>) -> Self {
        CalcError::UnknownPlywood {
            value: value.into(),
            valid: valid.into(),
        }
    }

    /// Create an UnknownBaseplateStyle error
    pub fn unknown_baseplate_style(value: impl Into<String>) -> Self {
        CalcError::UnknownBaseplateStyle {
            value: value.into(),
        }
    }

    /// Create an InvalidGridSpec error
    pub fn invalid_grid_spec(value: impl Into<String>) -> Self {
        CalcError::InvalidGridSpec {
            value: value.into(),
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

    /// Check if this is a recoverable error (e.g., can retry)
    ///
    /// Input errors are fatal: the same input fails the same way every time.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownPlywood { .. } => "UNKNOWN_PLYWOOD",
            CalcError::UnknownBaseplateStyle { .. } => "UNKNOWN_BASEPLATE_STYLE",
            CalcError::InvalidGridSpec { .. } => "INVALID_GRID_SPEC",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("interior_width_mm", "-5", "Dimension must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("width").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::invalid_grid_spec("6x4").error_code(), "INVALID_GRID_SPEC");
        assert_eq!(
            CalcError::unknown_baseplate_style("heavy").error_code(),
            "UNKNOWN_BASEPLATE_STYLE"
        );
    }

    #[test]
    fn test_messages_carry_offending_value() {
        let err = CalcError::unknown_plywood("1/8", "1/4, 3/8");
        assert_eq!(err.to_string(), "Unknown plywood size '1/8'. Valid: 1/4, 3/8");

        let err = CalcError::invalid_grid_spec("6x4");
        assert!(err.to_string().contains("'6x4'"));
    }

    #[test]
    fn test_only_file_errors_recoverable() {
        assert!(CalcError::file_error("write", "/tmp/x", "disk full").is_recoverable());
        assert!(!CalcError::invalid_grid_spec("x").is_recoverable());
    }
}
