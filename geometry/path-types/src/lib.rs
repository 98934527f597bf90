//! Sampled parametric paths for sweeping profiles.
//!
//! A [`Path`] is a finite, ordered list of [`PathSample`]s, each holding a
//! position and a tangent. Paths are the rails and guides of an extrusion:
//! the rail carries the profile, the guide fixes its roll.
//!
//! # Generators
//!
//! | Function | Curve |
//! |----------|-------|
//! | [`line`] | Straight segment, constant tangent |
//! | [`arc`] | Circular arc in the XY plane |
//! | [`helix`] | Circular arc rising linearly along Z |
//! | [`elliptical_arc`] | Elliptical arc in the XY plane, turned so it starts on +X |
//!
//! Each generator has a `try_` twin that rejects sample counts below two and
//! non-positive radii. The plain forms are permissive: `n == 1` divides by
//! zero and produces NaN samples.
//!
//! # Operations
//!
//! [`concat`], [`translate`], [`transform`], [`scale`], [`scale_uniform`],
//! [`rotate`] and [`rotate_axis`] build new paths from existing ones.
//!
//! # Example
//!
//! ```
//! use path_types::{helix, translate};
//! use nalgebra::{Point3, Vector3};
//! use std::f64::consts::PI;
//!
//! let rail = helix(0.0, 20.0 * PI, 2.0, 10.0, Point3::origin(), 1000);
//! let guide = translate(&rail, &Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!(rail.len(), guide.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]

mod arc;
mod ellipse;
mod error;
mod helix;
mod line;
mod ops;
mod path;

pub use arc::{arc, try_arc};
pub use ellipse::{elliptical_arc, elliptical_arc_oriented, try_elliptical_arc};
pub use error::PathError;
pub use helix::{helix, try_helix};
pub use line::{line, try_line};
pub use ops::{
    concat, rotate, rotate_axis, scale, scale_uniform, transform, translate, try_rotate_axis,
};
pub use path::{Path, PathSample};

/// Result type for path operations.
pub type Result<T> = std::result::Result<T, PathError>;
