//! Vector and point operations.
//!
//! Positions use [`Point3`] and displacements use [`Vector3`]; both share the
//! same `(x, y, z)` representation. The free functions here mirror the
//! operator forms so they can be passed around as plain functions.

use nalgebra::{Point3, Vector3};

use crate::error::{KernelError, KernelResult};

/// Build a displacement vector.
#[inline]
#[must_use]
pub fn vector(x: f64, y: f64, z: f64) -> Vector3<f64> {
    Vector3::new(x, y, z)
}

/// Build a position.
#[inline]
#[must_use]
pub fn point(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point3::new(x, y, z)
}

/// Dot product of two arbitrary vectors.
#[inline]
#[must_use]
pub fn dot(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Cross product of two arbitrary vectors.
///
/// # Example
///
/// ```
/// use kernel_types::{cross, vector};
///
/// let z = cross(&vector(1.0, 0.0, 0.0), &vector(0.0, 1.0, 0.0));
/// assert_eq!(z, vector(0.0, 0.0, 1.0));
/// ```
#[inline]
#[must_use]
pub fn cross(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Euclidean norm.
#[inline]
#[must_use]
pub fn norm(v: &Vector3<f64>) -> f64 {
    dot(v, v).sqrt()
}

/// Scalar multiplication, `k * v`.
#[inline]
#[must_use]
pub fn scale(k: f64, v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(k * v.x, k * v.y, k * v.z)
}

/// Normalize a vector, failing on zero or non-finite length.
///
/// # Errors
///
/// Returns [`KernelError::ZeroLength`] if the norm is zero, subnormal, or not
/// finite.
///
/// # Example
///
/// ```
/// use kernel_types::{try_normalize, vector};
///
/// let unit = try_normalize(&vector(0.0, 3.0, 4.0)).unwrap();
/// assert!((unit.y - 0.6).abs() < 1e-12);
///
/// assert!(try_normalize(&vector(0.0, 0.0, 0.0)).is_err());
/// ```
pub fn try_normalize(v: &Vector3<f64>) -> KernelResult<Vector3<f64>> {
    let n = norm(v);
    if n.is_normal() {
        Ok(scale(1.0 / n, v))
    } else {
        Err(KernelError::ZeroLength { norm: n })
    }
}

/// Normalize a vector without checking its length.
///
/// A zero vector yields non-finite components.
#[inline]
#[must_use]
pub fn normalize_unchecked(v: &Vector3<f64>) -> Vector3<f64> {
    scale(1.0 / norm(v), v)
}

/// Check that all three components are finite.
#[inline]
#[must_use]
pub fn is_finite(v: &Vector3<f64>) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}
