//! Error types for kernel operations.

use thiserror::Error;

/// Result type for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;

/// Numeric degeneracies detected by the checked kernel operations.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum KernelError {
    /// Vector has zero (or non-finite) length and cannot be normalized.
    #[error("cannot normalize vector of length {norm}")]
    ZeroLength {
        /// Euclidean length of the offending vector.
        norm: f64,
    },

    /// Matrix is singular (or numerically close to singular).
    #[error("matrix is singular: determinant {determinant}")]
    Singular {
        /// Determinant of the offending matrix.
        determinant: f64,
    },
}

impl KernelError {
    /// Check if this is a zero-length error.
    #[must_use]
    pub fn is_zero_length(&self) -> bool {
        matches!(self, Self::ZeroLength { .. })
    }

    /// Check if this is a singular matrix error.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Singular { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KernelError::ZeroLength { norm: 0.0 };
        assert!(err.to_string().contains("length 0"));

        let err = KernelError::Singular { determinant: 0.0 };
        assert!(err.to_string().contains("singular"));
    }

    #[test]
    fn test_error_predicates() {
        assert!(KernelError::ZeroLength { norm: 0.0 }.is_zero_length());
        assert!(!KernelError::ZeroLength { norm: 0.0 }.is_singular());
        assert!(KernelError::Singular { determinant: 1e-20 }.is_singular());
    }
}
