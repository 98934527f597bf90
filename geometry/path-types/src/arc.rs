//! Circular arc paths.
//!
//! Arcs lie in the plane spanned by the X and Y axes through `center`, and
//! are traced counter-clockwise when `end_angle > start_angle`.

use nalgebra::{Point3, Vector3};

use crate::path::linspace;
use crate::{Path, PathError, PathSample, Result};

/// Sample a circular arc with `n` samples from `start_angle` to `end_angle`.
///
/// Position is `center + (r cos θ, r sin θ, 0)`; the tangent is the analytic
/// derivative with respect to θ, `(-r sin θ, r cos θ, 0)`.
///
/// No validation: `n == 1` yields NaN samples. See [`try_arc`].
///
/// # Example
///
/// ```
/// use path_types::arc;
/// use nalgebra::Point3;
/// use std::f64::consts::FRAC_PI_2;
///
/// let path = arc(0.0, FRAC_PI_2, 2.0, Point3::origin(), 100);
/// let first = path[0].position;
/// let last = path[99].position;
/// assert!((first - Point3::new(2.0, 0.0, 0.0)).norm() < 1e-12);
/// assert!((last - Point3::new(0.0, 2.0, 0.0)).norm() < 1e-12);
/// ```
#[must_use]
pub fn arc(start_angle: f64, end_angle: f64, radius: f64, center: Point3<f64>, n: usize) -> Path {
    linspace(start_angle, end_angle, n)
        .map(|(_, theta)| {
            let (sin, cos) = theta.sin_cos();
            PathSample::new(
                center + Vector3::new(radius * cos, radius * sin, 0.0),
                Vector3::new(-radius * sin, radius * cos, 0.0),
            )
        })
        .collect()
}

/// Checked form of [`arc`].
///
/// # Errors
///
/// Returns [`PathError::TooFewSamples`] if `n < 2` and
/// [`PathError::InvalidRadius`] if the radius is not positive and finite.
pub fn try_arc(
    start_angle: f64,
    end_angle: f64,
    radius: f64,
    center: Point3<f64>,
    n: usize,
) -> Result<Path> {
    if n < 2 {
        return Err(PathError::too_few_samples(n));
    }
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(PathError::InvalidRadius(radius));
    }
    Ok(arc(start_angle, end_angle, radius, center, n))
}
