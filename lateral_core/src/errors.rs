//! # Error Types
//!
//! Structured error types for lateral_core. The Coulomb formulas reject two
//! kinds of angle combinations: a trigonometric denominator that vanishes
//! ([`CalcError::DivisionByZero`]) and a ratio under a square root that turns
//! negative ([`CalcError::DomainError`]). Everything else is malformed caller
//! input or file handling.
//!
//! ## Example
//!
//! ```rust
//! use lateral_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height_m: f64) -> CalcResult<()> {
//!     if height_m < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "height_m",
//!             height_m.to_string(),
//!             "Height cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_height(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for lateral_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Magnitude below which a denominator is treated as zero.
///
/// `cos(90°)` evaluates to roughly 6e-17 in double precision, so an exact
/// comparison against `0.0` would let degenerate geometry through.
pub const ZERO_TOLERANCE: f64 = 1e-12;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A trigonometric denominator of a Coulomb formula evaluates to zero
    #[error("Division by zero: {term} vanishes for the given angles")]
    DivisionByZero { term: String },

    /// A term that must be non-negative (a radicand, or the sign of K) is negative
    #[error("Domain error: {term} = {value} is negative for the given angles")]
    DomainError { term: String, value: f64 },

    /// An input value is invalid (non-finite, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

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
}

impl CalcError {
    /// Create a DivisionByZero error
    pub fn division_by_zero(term: impl Into<String>) -> Self {
        CalcError::DivisionByZero { term: term.into() }
    }

    /// Create a DomainError
    pub fn domain_error(term: impl Into<String>, value: f64) -> Self {
        CalcError::DomainError {
            term: term.into(),
            value,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
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

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True when the Coulomb formulas refused the angle combination.
    ///
    /// These are never transient; retrying with the same angles fails again.
    pub fn is_coulomb_rejection(&self) -> bool {
        matches!(self, CalcError::DivisionByZero { .. } | CalcError::DomainError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Return `DivisionByZero` for `term` when `value` is numerically zero.
pub(crate) fn ensure_nonzero(term: &str, value: f64, tolerance: f64) -> CalcResult<f64> {
    if value.abs() < tolerance {
        tracing::warn!(term, value, "denominator vanishes");
        return Err(CalcError::division_by_zero(term));
    }
    Ok(value)
}

/// Return `DomainError` for `term` when `value` is negative.
pub(crate) fn ensure_non_negative(term: &str, value: f64) -> CalcResult<f64> {
    if value < 0.0 {
        tracing::warn!(term, value, "term must not be negative");
        return Err(CalcError::domain_error(term, value));
    }
    Ok(value)
}

/// Return `InvalidInput` for `field` when `value` is NaN or infinite.
pub(crate) fn ensure_finite(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::domain_error("sin(φ+δ)·sin(φ−β) / (cos(α+δ)·cos(α−β))", -0.12);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"DomainError\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::division_by_zero("cos(α+δ)").error_code(), "DIVISION_BY_ZERO");
        assert_eq!(CalcError::domain_error("R", -1.0).error_code(), "DOMAIN_ERROR");
        assert_eq!(CalcError::invalid_input("n", "1", "too few").error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_coulomb_rejection() {
        assert!(CalcError::division_by_zero("cos(α+δ)").is_coulomb_rejection());
        assert!(CalcError::domain_error("R", -1.0).is_coulomb_rejection());
        assert!(!CalcError::serialization("bad json").is_coulomb_rejection());
    }

    #[test]
    fn test_guards() {
        assert!(ensure_nonzero("x", 1e-17, ZERO_TOLERANCE).is_err());
        assert_eq!(ensure_nonzero("x", -0.5, ZERO_TOLERANCE).unwrap(), -0.5);
        assert!(ensure_non_negative("r", -1e-9).is_err());
        assert_eq!(ensure_non_negative("r", 0.0).unwrap(), 0.0);
        assert!(ensure_finite("phi_k", f64::NAN).is_err());
        assert!(ensure_finite("phi_k", f64::INFINITY).is_err());
    }
}
