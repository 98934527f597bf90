//! 3x3 matrix operations.
//!
//! Matrices are [`Matrix3`] values built column-wise from three basis vectors.
//! Addition, negation and products come from nalgebra's operators; this
//! module adds the closed-form determinant and inverse used by the sweep, and
//! the constructors needed by path transforms.

use nalgebra::{Matrix3, Vector3};

use crate::error::{KernelError, KernelResult};
use crate::vector::norm;

/// Relative determinant threshold below which [`try_inverse`] reports a
/// singular matrix.
///
/// The determinant is compared against the product of the column norms, so
/// the test is independent of the overall scale of the matrix.
pub const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Build a matrix whose columns are `c1`, `c2`, `c3`.
///
/// # Example
///
/// ```
/// use kernel_types::{from_columns, vector};
///
/// let m = from_columns(&vector(1.0, 2.0, 3.0), &vector(0.0, 1.0, 0.0), &vector(0.0, 0.0, 1.0));
/// assert_eq!(m[(1, 0)], 2.0);
/// ```
#[inline]
#[must_use]
pub fn from_columns(c1: &Vector3<f64>, c2: &Vector3<f64>, c3: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::from_columns(&[*c1, *c2, *c3])
}

/// Determinant by cofactor expansion along the first row.
#[must_use]
pub fn determinant(m: &Matrix3<f64>) -> f64 {
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        + m[(0, 1)] * (m[(2, 0)] * m[(1, 2)] - m[(1, 0)] * m[(2, 2)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(2, 0)] * m[(1, 1)])
}

/// Adjugate (transposed cofactor matrix).
#[must_use]
#[rustfmt::skip]
pub fn adjugate(m: &Matrix3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        m[(1, 1)] * m[(2, 2)] - m[(2, 1)] * m[(1, 2)],
        m[(2, 1)] * m[(0, 2)] - m[(0, 1)] * m[(2, 2)],
        m[(0, 1)] * m[(1, 2)] - m[(1, 1)] * m[(0, 2)],

        m[(2, 0)] * m[(1, 2)] - m[(1, 0)] * m[(2, 2)],
        m[(0, 0)] * m[(2, 2)] - m[(2, 0)] * m[(0, 2)],
        m[(1, 0)] * m[(0, 2)] - m[(0, 0)] * m[(1, 2)],

        m[(1, 0)] * m[(2, 1)] - m[(2, 0)] * m[(1, 1)],
        m[(2, 0)] * m[(0, 1)] - m[(0, 0)] * m[(2, 1)],
        m[(0, 0)] * m[(1, 1)] - m[(1, 0)] * m[(0, 1)],
    )
}

/// Inverse by adjugate over determinant, without a singularity check.
///
/// A singular matrix produces infinite or NaN coefficients.
#[must_use]
pub fn inverse_unchecked(m: &Matrix3<f64>) -> Matrix3<f64> {
    scale_matrix(1.0 / determinant(m), &adjugate(m))
}

/// Inverse by adjugate over determinant.
///
/// # Errors
///
/// Returns [`KernelError::Singular`] when the determinant is not finite or
/// is negligible relative to the product of the column norms.
///
/// # Example
///
/// ```
/// use kernel_types::{try_inverse, vector, from_columns};
/// use nalgebra::Matrix3;
///
/// let m = from_columns(&vector(2.0, 0.0, 0.0), &vector(0.0, 4.0, 0.0), &vector(0.0, 0.0, 0.5));
/// let inv = try_inverse(&m).unwrap();
/// assert!(((m * inv) - Matrix3::identity()).norm() < 1e-12);
///
/// let flat = from_columns(&vector(1.0, 0.0, 0.0), &vector(2.0, 0.0, 0.0), &vector(0.0, 0.0, 1.0));
/// assert!(try_inverse(&flat).is_err());
/// ```
pub fn try_inverse(m: &Matrix3<f64>) -> KernelResult<Matrix3<f64>> {
    let det = determinant(m);
    let scale: f64 = m.column_iter().map(|c| c.norm()).product();
    if !det.is_finite() || det.abs() <= SINGULAR_TOLERANCE * scale {
        return Err(KernelError::Singular { determinant: det });
    }
    Ok(scale_matrix(1.0 / det, &adjugate(m)))
}

/// Uniform scaling, `k * m`.
#[inline]
#[must_use]
pub fn scale_matrix(k: f64, m: &Matrix3<f64>) -> Matrix3<f64> {
    m.map(|c| k * c)
}

/// Diagonal matrix with per-axis scale factors.
#[inline]
#[must_use]
pub fn diagonal(scales: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::from_diagonal(scales)
}

/// Rotation from yaw, pitch and roll angles in radians.
///
/// `angles` is `(yaw, pitch, roll)`; the result is `Rz(yaw) * Ry(pitch) *
/// Rx(roll)`, so roll is applied first and yaw last.
///
/// # Example
///
/// ```
/// use kernel_types::{yaw_pitch_roll, vector};
/// use std::f64::consts::FRAC_PI_2;
///
/// let r = yaw_pitch_roll(&vector(FRAC_PI_2, 0.0, 0.0));
/// let v = r * vector(1.0, 0.0, 0.0);
/// assert!((v.y - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn yaw_pitch_roll(angles: &Vector3<f64>) -> Matrix3<f64> {
    let (sy, cy) = angles.x.sin_cos();
    let (sp, cp) = angles.y.sin_cos();
    let (sr, cr) = angles.z.sin_cos();

    #[rustfmt::skip]
    let rz = Matrix3::new(
        cy, -sy, 0.0,
        sy,  cy, 0.0,
        0.0, 0.0, 1.0,
    );
    #[rustfmt::skip]
    let ry = Matrix3::new(
         cp, 0.0, sp,
        0.0, 1.0, 0.0,
        -sp, 0.0, cp,
    );
    #[rustfmt::skip]
    let rx = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0,  cr, -sr,
        0.0,  sr,  cr,
    );

    rz * ry * rx
}

/// Rotation by `angle` radians around `axis` (Rodrigues' formula).
///
/// The axis is normalized first; a zero axis produces NaN coefficients.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn axis_angle(axis: &Vector3<f64>, angle: f64) -> Matrix3<f64> {
    let k = axis / norm(axis);
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    let (x, y, z) = (k.x, k.y, k.z);

    #[rustfmt::skip]
    let m = Matrix3::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,
    );
    m
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::vector::vector;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn skewed() -> Matrix3<f64> {
        from_columns(
            &vector(1.0, 2.0, 0.5),
            &vector(-1.0, 0.5, 3.0),
            &vector(0.25, -2.0, 1.0),
        )
    }

    #[test]
    fn test_from_columns_layout() {
        let m = skewed();
        assert_relative_eq!(m[(0, 0)], 1.0);
        assert_relative_eq!(m[(1, 0)], 2.0);
        assert_relative_eq!(m[(2, 1)], 3.0);
        assert_relative_eq!(m[(0, 2)], 0.25);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Matrix3::<f64>::zeros(), Matrix3::from_element(0.0));
        assert_relative_eq!(determinant(&Matrix3::zeros()), 0.0);
    }

    #[test]
    fn test_determinant_matches_nalgebra() {
        let m = skewed();
        assert_relative_eq!(determinant(&m), m.determinant(), epsilon = 1e-12);
        assert_relative_eq!(determinant(&Matrix3::identity()), 1.0);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let m = skewed();
        let inv = try_inverse(&m).expect("invertible");
        assert_relative_eq!(m * inv, Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(inv * m, Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(inverse_unchecked(&m), inv);
    }

    #[test]
    fn test_singular_detected() {
        let m = from_columns(
            &vector(1.0, 2.0, 3.0),
            &vector(2.0, 4.0, 6.0),
            &vector(0.0, 0.0, 1.0),
        );
        let err = try_inverse(&m);
        assert!(matches!(err, Err(KernelError::Singular { .. })));
    }

    #[test]
    fn test_singular_unchecked_propagates() {
        let inv = inverse_unchecked(&Matrix3::zeros());
        assert!(inv.iter().all(|c| !c.is_finite()));
    }

    #[test]
    fn test_tolerance_is_scale_independent() {
        let tiny = scale_matrix(1e-6, &Matrix3::identity());
        let inv = try_inverse(&tiny).expect("scaled identity is invertible");
        assert_relative_eq!(inv, scale_matrix(1e6, &Matrix3::identity()), epsilon = 1e-3);
    }

    #[test]
    fn test_scale_and_diagonal() {
        let d = diagonal(&vector(1.0, 2.0, 3.0));
        assert_relative_eq!(d * vector(1.0, 1.0, 1.0), vector(1.0, 2.0, 3.0));
        assert_relative_eq!(scale_matrix(2.0, &Matrix3::identity()), diagonal(&vector(2.0, 2.0, 2.0)));
        assert_relative_eq!(-d + d, Matrix3::zeros());
    }

    #[test]
    fn test_yaw_pitch_roll_axes() {
        let pitch = yaw_pitch_roll(&vector(0.0, FRAC_PI_2, 0.0));
        assert_relative_eq!(pitch * Vector3::z(), Vector3::x(), epsilon = 1e-12);

        let roll = yaw_pitch_roll(&vector(0.0, 0.0, FRAC_PI_2));
        assert_relative_eq!(roll * Vector3::y(), Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_yaw_pitch_roll_is_rotation() {
        let r = yaw_pitch_roll(&vector(0.3, -1.1, 2.4));
        assert_relative_eq!(r.transpose() * r, Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(determinant(&r), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_yaw_pitch_roll_order() {
        let (yaw, pitch, roll) = (0.7, -0.4, 1.9);
        let r = yaw_pitch_roll(&vector(yaw, pitch, roll));
        let composed = axis_angle(&Vector3::z(), yaw)
            * axis_angle(&Vector3::y(), pitch)
            * axis_angle(&Vector3::x(), roll);
        assert_relative_eq!(r, composed, epsilon = 1e-12);

        // The reverse order is a different rotation
        let swapped = axis_angle(&Vector3::x(), roll)
            * axis_angle(&Vector3::y(), pitch)
            * axis_angle(&Vector3::z(), yaw);
        assert!((r - swapped).norm() > 1e-3);
    }

    #[test]
    fn test_axis_angle_matches_yaw() {
        let a = axis_angle(&vector(0.0, 0.0, 2.0), PI / 3.0);
        let b = yaw_pitch_roll(&vector(PI / 3.0, 0.0, 0.0));
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }
}
