//! # Error Types
//!
//! Structured error types for shield_core. Every contract violation in the
//! engine surfaces as [`ShieldError::InvalidInput`] with enough context
//! (field, offending value, reason) for a caller to re-prompt the user.
//!
//! Mathematically infinite results (half-value layer of a transparent
//! material, thickness for 100% reduction) are NOT errors; they are
//! returned as [`crate::quantity::Quantity::Infinite`].
//!
//! ## Example
//!
//! ```rust
//! use shield_core::errors::{ShieldError, ShieldResult};
//!
//! fn validate_distance(distance_cm: f64) -> ShieldResult<()> {
//!     if distance_cm <= 0.0 {
//!         return Err(ShieldError::invalid_input(
//!             "distance_cm",
//!             distance_cm.to_string(),
//!             "Distance must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for shield_core operations
pub type ShieldResult<T> = Result<T, ShieldError>;

/// Structured error type for shielding calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ShieldError {
    /// An input value is invalid (negative, out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material key not present in the reference data
    #[error("Material not found: {key}")]
    MaterialNotFound { key: String },

    /// Radiation source key not present in the reference data
    #[error("Radiation source not found: {key}")]
    SourceNotFound { key: String },

    /// Reference data file could not be read
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Reference data could not be parsed
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl ShieldError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ShieldError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(key: impl Into<String>) -> Self {
        ShieldError::MaterialNotFound { key: key.into() }
    }

    /// Create a SourceNotFound error
    pub fn source_not_found(key: impl Into<String>) -> Self {
        ShieldError::SourceNotFound { key: key.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ShieldError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        ShieldError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ShieldError::InvalidInput { .. } => "INVALID_INPUT",
            ShieldError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            ShieldError::SourceNotFound { .. } => "SOURCE_NOT_FOUND",
            ShieldError::FileError { .. } => "FILE_ERROR",
            ShieldError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

/// Reject NaN and infinities for a named input.
pub(crate) fn require_finite(field: &str, value: f64) -> ShieldResult<()> {
    if !value.is_finite() {
        return Err(ShieldError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    Ok(())
}

/// Require a finite value >= 0.
pub(crate) fn require_non_negative(field: &str, value: f64) -> ShieldResult<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(ShieldError::invalid_input(
            field,
            value.to_string(),
            "Value cannot be negative",
        ));
    }
    Ok(())
}

/// Require a finite value in the closed interval [0, 1].
pub(crate) fn require_unit_interval(field: &str, value: f64) -> ShieldResult<()> {
    require_finite(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ShieldError::invalid_input(
            field,
            value.to_string(),
            "Value must be between 0 and 1",
        ));
    }
    Ok(())
}

/// Require a finite percentage in [0, 100].
pub(crate) fn require_percentage(field: &str, value: f64) -> ShieldResult<()> {
    require_finite(field, value)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(ShieldError::invalid_input(
            field,
            value.to_string(),
            "Percentage must be between 0 and 100",
        ));
    }
    Ok(())
}
