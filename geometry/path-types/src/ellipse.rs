//! Elliptical arc paths.
//!
//! The ellipse has semi-axis `a` along X and `b` along Y in its local frame.
//! Sampling is in the eccentric anomaly φ, with a phase offset chosen so the
//! first sample sits at polar angle `start_angle` in that frame. The local
//! frame is then turned by `-start_angle` about Z, which brings the first
//! sample onto the +X axis through `center`.

use nalgebra::{Matrix3, Point3, Vector3};

use crate::{Path, PathError, PathSample, Result};

/// Sample an elliptical arc with `n` samples.
///
/// The phase starts at `φ0 = atan2(a sin θ0, b cos θ0)` and advances by
/// `(end_angle - start_angle) / (n - 1)` per sample. Positions and tangents
/// are rotated by the matrix with columns `(cos θ0, -sin θ0, 0)`,
/// `(sin θ0, cos θ0, 0)`, `(0, 0, 1)`. Only the first sample is guaranteed
/// to lie at its local polar angle; for `a != b` later samples drift.
///
/// # Example
///
/// ```
/// use path_types::elliptical_arc;
/// use nalgebra::Point3;
/// use std::f64::consts::FRAC_PI_4;
///
/// let (a, b) = (3.0, 2.0);
/// let path = elliptical_arc(FRAC_PI_4, 1.0, a, b, Point3::origin(), 10);
///
/// // Ellipse radius at polar angle θ0, turned onto the +X axis
/// let (s, c) = FRAC_PI_4.sin_cos();
/// let r = a * b / ((b * c).powi(2) + (a * s).powi(2)).sqrt();
/// let p = path[0].position;
/// assert!((p.x - r).abs() < 1e-12);
/// assert!(p.y.abs() < 1e-12);
/// ```
#[must_use]
pub fn elliptical_arc(
    start_angle: f64,
    end_angle: f64,
    a: f64,
    b: f64,
    center: Point3<f64>,
    n: usize,
) -> Path {
    elliptical_arc_oriented(start_angle, end_angle, a, b, center, -start_angle, n)
}

/// Sample an elliptical arc whose major axes are rotated in the XY plane by
/// `orientation` radians.
///
/// Position and tangent are both rotated, so the first sample lies at polar
/// angle `start_angle + orientation`. [`elliptical_arc`] is the case
/// `orientation = -start_angle`.
#[must_use]
pub fn elliptical_arc_oriented(
    start_angle: f64,
    end_angle: f64,
    a: f64,
    b: f64,
    center: Point3<f64>,
    orientation: f64,
    n: usize,
) -> Path {
    let (sin, cos) = orientation.sin_cos();
    let rotation = Matrix3::from_columns(&[
        Vector3::new(cos, sin, 0.0),
        Vector3::new(-sin, cos, 0.0),
        Vector3::z(),
    ]);
    sample_ellipse(start_angle, end_angle, a, b, center, &rotation, n)
}

/// Checked form of [`elliptical_arc`].
///
/// # Errors
///
/// Returns [`PathError::TooFewSamples`] if `n < 2` and
/// [`PathError::InvalidSemiAxes`] unless both semi-axes are positive and
/// finite.
pub fn try_elliptical_arc(
    start_angle: f64,
    end_angle: f64,
    a: f64,
    b: f64,
    center: Point3<f64>,
    n: usize,
) -> Result<Path> {
    if n < 2 {
        return Err(PathError::too_few_samples(n));
    }
    let valid = |s: f64| s > 0.0 && s.is_finite();
    if !(valid(a) && valid(b)) {
        return Err(PathError::InvalidSemiAxes { a, b });
    }
    Ok(elliptical_arc(start_angle, end_angle, a, b, center, n))
}

fn sample_ellipse(
    start_angle: f64,
    end_angle: f64,
    a: f64,
    b: f64,
    center: Point3<f64>,
    rotation: &Matrix3<f64>,
    n: usize,
) -> Path {
    let (sin0, cos0) = start_angle.sin_cos();
    let phase = (a * sin0).atan2(b * cos0);
    let step = (end_angle - start_angle) / (n as f64 - 1.0);

    (0..n)
        .map(|i| {
            let (sin, cos) = (phase + i as f64 * step).sin_cos();
            PathSample::new(
                center + rotation * Vector3::new(a * cos, b * sin, 0.0),
                rotation * Vector3::new(-a * sin, b * cos, 0.0),
            )
        })
        .collect()
}
