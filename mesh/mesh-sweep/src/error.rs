//! Error types for sweep operations.

use kernel_types::KernelError;
use thiserror::Error;

/// Result type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// Errors reported by the checked sweep.
///
/// The unchecked entry points never fail; they let the same conditions
/// surface as non-finite coordinates in the output.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SweepError {
    /// Profile has too few points to bound an area.
    #[error("profile needs at least {min} points, got {actual}")]
    TooFewProfilePoints {
        /// Minimum required points.
        min: usize,
        /// Actual point count.
        actual: usize,
    },

    /// Rail or guide has no samples.
    #[error("rail and guide must have at least one sample")]
    EmptyPath,

    /// Rail and guide are not sampled 1:1.
    #[error("rail has {rail} samples but guide has {guide}")]
    PathLengthMismatch {
        /// Rail sample count.
        rail: usize,
        /// Guide sample count.
        guide: usize,
    },

    /// Rail tangent cannot be normalized.
    #[error("zero-length rail tangent at sample {index}")]
    DegenerateTangent {
        /// Sample index.
        index: usize,
    },

    /// Guide offset is zero or parallel to the rail tangent.
    #[error("singular frame at sample {index} (determinant {determinant:e})")]
    SingularFrame {
        /// Sample index.
        index: usize,
        /// Determinant of the frame matrix.
        determinant: f64,
    },

    /// Rail or guide sample holds a non-finite position or tangent.
    #[error("non-finite path sample at index {index}")]
    NonFinite {
        /// Sample index.
        index: usize,
    },

    /// Profile point holds a non-finite coordinate.
    #[error("non-finite profile point at index {index}")]
    NonFiniteProfilePoint {
        /// Point index.
        index: usize,
    },

    /// Error from the vector/matrix kernel.
    #[error(transparent)]
    Kernel(#[from] KernelError),
}

impl SweepError {
    /// Sample index the error refers to, if any.
    #[must_use]
    pub fn sample_index(&self) -> Option<usize> {
        match self {
            Self::DegenerateTangent { index }
            | Self::SingularFrame { index, .. }
            | Self::NonFinite { index } => Some(*index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SweepError::PathLengthMismatch { rail: 200, guide: 100 };
        assert_eq!(err.to_string(), "rail has 200 samples but guide has 100");

        let err = SweepError::TooFewProfilePoints { min: 3, actual: 2 };
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn test_kernel_error_conversion() {
        let err: SweepError = KernelError::ZeroLength { norm: 0.0 }.into();
        assert!(matches!(err, SweepError::Kernel(_)));
        assert_eq!(err.sample_index(), None);
    }

    #[test]
    fn test_sample_index() {
        assert_eq!(SweepError::DegenerateTangent { index: 4 }.sample_index(), Some(4));
        assert_eq!(
            SweepError::SingularFrame { index: 7, determinant: 0.0 }.sample_index(),
            Some(7)
        );
        assert_eq!(SweepError::EmptyPath.sample_index(), None);
    }
}
