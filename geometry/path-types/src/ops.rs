//! Path operations: concatenation, translation and linear transforms.
//!
//! Every operation returns a new path and leaves its input untouched.
//! Linear maps act on both positions and tangents; translation moves
//! positions only.

use kernel_types::{cross, diagonal, dot, try_normalize, yaw_pitch_roll};
use nalgebra::{Matrix3, Point3, Vector3};

use crate::{Path, PathError, PathSample, Result};

/// Append `second` after `first`.
///
/// No de-duplication: if `first` ends where `second` begins, the joint
/// appears twice.
///
/// # Example
///
/// ```
/// use path_types::{concat, line};
/// use nalgebra::Point3;
///
/// let a = line(Point3::origin(), Point3::new(1.0, 0.0, 0.0), 3);
/// let b = line(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0), 3);
/// let joined = concat(&a, &b);
/// assert_eq!(joined.len(), 6);
/// assert_eq!(joined[2].position, joined[3].position);
/// ```
#[must_use]
pub fn concat(first: &Path, second: &Path) -> Path {
    first.iter().chain(second.iter()).copied().collect()
}

/// Move every position by `offset`. Tangents are unchanged.
#[must_use]
pub fn translate(path: &Path, offset: &Vector3<f64>) -> Path {
    path.map_samples(|s| PathSample::new(s.position + offset, s.tangent))
}

/// Apply `m` to every position (as a vector from the origin) and tangent.
#[must_use]
pub fn transform(path: &Path, m: &Matrix3<f64>) -> Path {
    path.map_samples(|s| PathSample::new(Point3::from(m * s.position.coords), m * s.tangent))
}

/// Scale each axis independently about the origin.
#[must_use]
pub fn scale(path: &Path, factors: &Vector3<f64>) -> Path {
    transform(path, &diagonal(factors))
}

/// Scale all axes by `factor` about the origin.
#[must_use]
pub fn scale_uniform(path: &Path, factor: f64) -> Path {
    scale(path, &Vector3::repeat(factor))
}

/// Rotate about the origin by yaw (Z), pitch (Y) and roll (X), packed as
/// `(yaw, pitch, roll)`.
#[must_use]
pub fn rotate(path: &Path, angles: &Vector3<f64>) -> Path {
    transform(path, &yaw_pitch_roll(angles))
}

/// Rotate about `axis` through the origin by `angle` radians.
///
/// A zero axis normalizes to NaN and poisons every sample.
/// See [`try_rotate_axis`].
#[must_use]
pub fn rotate_axis(path: &Path, angle: f64, axis: &Vector3<f64>) -> Path {
    rodrigues(path, angle, &(axis / axis.norm()))
}

/// Checked form of [`rotate_axis`].
///
/// # Errors
///
/// Returns [`PathError::ZeroAxis`] if `axis` cannot be normalized.
pub fn try_rotate_axis(path: &Path, angle: f64, axis: &Vector3<f64>) -> Result<Path> {
    let k = try_normalize(axis).map_err(|_| PathError::ZeroAxis)?;
    Ok(rodrigues(path, angle, &k))
}

fn rodrigues(path: &Path, angle: f64, k: &Vector3<f64>) -> Path {
    let (sin, cos) = angle.sin_cos();
    let rotate = |v: &Vector3<f64>| cos * v + sin * cross(k, v) + (1.0 - cos) * dot(k, v) * k;

    path.map_samples(|s| {
        PathSample::new(
            Point3::from(rotate(&s.position.coords)),
            rotate(&s.tangent),
        )
    })
}
