//! Helical paths.
//!
//! A helix winds around the Z axis through `center` while rising linearly
//! from `center.z` to `center.z + height`.

use nalgebra::{Point3, Vector3};

use crate::path::linspace;
use crate::{Path, PathError, PathSample, Result};

/// Sample a helix with `n` samples.
///
/// The angle runs from `start_angle` to `end_angle` exactly as in
/// [`arc`](crate::arc). The height of sample `i` is `i * height / (n - 1)`,
/// so the tangent's Z component is the constant `height / (end - start)`.
///
/// # Example
///
/// ```
/// use path_types::helix;
/// use nalgebra::Point3;
/// use std::f64::consts::TAU;
///
/// // Two turns, rising 4 units
/// let path = helix(0.0, 2.0 * TAU, 1.0, 4.0, Point3::origin(), 101);
/// let end = path[100].position;
/// assert!((end.z - 4.0).abs() < 1e-12);
/// assert!((end.x - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn helix(
    start_angle: f64,
    end_angle: f64,
    radius: f64,
    height: f64,
    center: Point3<f64>,
    n: usize,
) -> Path {
    let rise = height / (end_angle - start_angle);
    let last = n as f64 - 1.0;

    linspace(start_angle, end_angle, n)
        .map(|(i, theta)| {
            let (sin, cos) = theta.sin_cos();
            PathSample::new(
                center + Vector3::new(radius * cos, radius * sin, i as f64 * height / last),
                Vector3::new(-radius * sin, radius * cos, rise),
            )
        })
        .collect()
}

/// Checked form of [`helix`].
///
/// # Errors
///
/// Returns [`PathError::TooFewSamples`] if `n < 2`,
/// [`PathError::InvalidRadius`] if the radius is not positive and finite, and
/// [`PathError::InvalidAngleSpan`] if the angles coincide (the rise rate
/// would be undefined).
pub fn try_helix(
    start_angle: f64,
    end_angle: f64,
    radius: f64,
    height: f64,
    center: Point3<f64>,
    n: usize,
) -> Result<Path> {
    if n < 2 {
        return Err(PathError::too_few_samples(n));
    }
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(PathError::InvalidRadius(radius));
    }
    let span = end_angle - start_angle;
    if !(span.abs() > 0.0 && span.is_finite()) {
        return Err(PathError::InvalidAngleSpan {
            start: start_angle,
            end: end_angle,
        });
    }
    Ok(helix(start_angle, end_angle, radius, height, center, n))
}
