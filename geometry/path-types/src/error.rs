//! Error types for path operations.

use thiserror::Error;

/// Errors reported by the checked path generators and transforms.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathError {
    /// Too few samples requested to span the parameter interval.
    #[error("too few samples: need at least {min}, got {actual}")]
    TooFewSamples {
        /// Minimum sample count.
        min: usize,
        /// Requested sample count.
        actual: usize,
    },

    /// Radius must be positive and finite.
    #[error("invalid radius: {0} (must be positive)")]
    InvalidRadius(f64),

    /// Ellipse semi-axes must be positive and finite.
    #[error("invalid semi-axes: a = {a}, b = {b} (must be positive)")]
    InvalidSemiAxes {
        /// Semi-axis along X.
        a: f64,
        /// Semi-axis along Y.
        b: f64,
    },

    /// Angular span is empty where a non-empty one is required.
    #[error("invalid angle span: {start} to {end}")]
    InvalidAngleSpan {
        /// Start angle in radians.
        start: f64,
        /// End angle in radians.
        end: f64,
    },

    /// Rotation axis has zero length.
    #[error("rotation axis has zero length")]
    ZeroAxis,

    /// A sample holds a non-finite position or tangent.
    #[error("non-finite sample at index {index}")]
    NonFinite {
        /// Index of the first offending sample.
        index: usize,
    },
}

impl PathError {
    /// Create a too-few-samples error for generators that need two samples.
    #[must_use]
    pub fn too_few_samples(actual: usize) -> Self {
        Self::TooFewSamples { min: 2, actual }
    }

    /// Check if this is a sample count error.
    #[must_use]
    pub fn is_too_few_samples(&self) -> bool {
        matches!(self, Self::TooFewSamples { .. })
    }
}
