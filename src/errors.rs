//! Error types for vector and matrix operations.
//!
//! This module provides a unified error type [`GeomError`] covering the failure
//! modes of 3D vector algebra: numerical issues (division by a zero magnitude,
//! invalid component indices) and shape mismatches in slice-based interop.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`MathError`](GeomError::MathError) | Division by zero magnitude, invalid input |
//! | [`ShapeError`](GeomError::ShapeError) | Slice input of the wrong length |
//!
//! # Usage
//!
//! Fallible operations return [`GeomResult<T>`], which is `Result<T, GeomError>`.
//! Use the constructor methods for consistent error creation:
//!
//! ```
//! use cartesian3d::{GeomError, MathErrorKind};
//!
//! fn safe_divide(a: f64, b: f64) -> Result<f64, GeomError> {
//!     if b == 0.0 {
//!         return Err(GeomError::math_error(
//!             "safe_divide",
//!             MathErrorKind::DivisionByZero,
//!             "divisor is zero",
//!         ));
//!     }
//!     Ok(a / b)
//! }
//! ```
//!
//! All errors are raised synchronously at the call that violates the contract
//! and carry no partial result. They represent contract violations by the
//! caller, not transient conditions, so none of them is worth retrying.

use thiserror::Error;

/// Classification of mathematical errors.
///
/// Used with [`GeomError::MathError`] to distinguish between different
/// numerical failure modes.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Attempted division by a zero or zero-magnitude value.
    DivisionByZero,
    /// Input value is invalid for the operation (e.g., component index > 2).
    InvalidInput,
}

/// Unified error type for 3D vector and matrix operations.
///
/// Use the constructor methods ([`math_error`](Self::math_error),
/// [`shape_error`](Self::shape_error)) for consistent error creation.
#[derive(Error, Debug)]
pub enum GeomError {
    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Slice-based input does not match the required fixed dimensionality.
    #[error("Shape error in {operation}: expected {expected} elements, got {actual}")]
    ShapeError {
        operation: String,
        expected: usize,
        actual: usize,
    },
}

/// Convenience alias for `Result<T, GeomError>`.
pub type GeomResult<T> = Result<T, GeomError>;

impl GeomError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`ShapeError`](Self::ShapeError).
    pub fn shape_error(operation: &str, expected: usize, actual: usize) -> Self {
        Self::ShapeError {
            operation: operation.to_string(),
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_with_kind() {
        let err = GeomError::math_error(
            "Vector3::normalize",
            MathErrorKind::DivisionByZero,
            "zero-magnitude vector",
        );
        assert!(err.to_string().contains("Math error"));
        assert!(err.to_string().contains("DivisionByZero"));
        assert!(err.to_string().contains("Vector3::normalize"));
    }

    #[test]
    fn test_shape_error() {
        let err = GeomError::shape_error("Vector3::from_slice", 3, 5);
        assert_eq!(
            err.to_string(),
            "Shape error in Vector3::from_slice: expected 3 elements, got 5"
        );
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<GeomError>();
        _assert_sync::<GeomError>();
    }
}
