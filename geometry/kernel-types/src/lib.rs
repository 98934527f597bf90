//! Vector, point and 3x3 matrix kernel for path extrusion.
//!
//! This crate is the numeric foundation of the sweep pipeline:
//!
//! - [`vector`] - free-function forms of the vector algebra (`dot`, `cross`,
//!   `norm`, `scale`) plus checked normalization
//! - [`matrix`] - closed-form determinant and adjugate inverse, diagonal and
//!   yaw/pitch/roll constructors
//!
//! Values are plain nalgebra types: [`Point3`] for positions, [`Vector3`] for
//! displacements and directions, [`Matrix3`] for linear maps. Every operation
//! is pure.
//!
//! # Checked and unchecked forms
//!
//! Degenerate input (a zero vector, a singular matrix) has two treatments.
//! The `_unchecked` functions divide anyway and let `inf`/`NaN` flow into the
//! result. The `try_` functions return a [`KernelError`] instead.
//!
//! ```
//! use kernel_types::{from_columns, inverse_unchecked, try_inverse, vector, KernelError};
//!
//! let singular = from_columns(
//!     &vector(1.0, 0.0, 0.0),
//!     &vector(0.0, 1.0, 0.0),
//!     &vector(1.0, 1.0, 0.0),
//! );
//!
//! assert!(matches!(try_inverse(&singular), Err(KernelError::Singular { .. })));
//! assert!(inverse_unchecked(&singular).iter().any(|c| !c.is_finite()));
//! ```
//!
//! # Coordinate System
//!
//! Right-handed. Angles are in radians.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::suboptimal_flops, clippy::similar_names)]

pub mod matrix;
pub mod vector;

mod error;

pub use error::{KernelError, KernelResult};
pub use matrix::{
    SINGULAR_TOLERANCE, adjugate, axis_angle, determinant, diagonal, from_columns,
    inverse_unchecked, scale_matrix, try_inverse, yaw_pitch_roll,
};
pub use vector::{
    cross, dot, is_finite, norm, normalize_unchecked, point, scale, try_normalize, vector,
};

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, Vector3};
