//! Profile localization and profile builders.

use std::f64::consts::TAU;

use kernel_types::{KernelError, inverse_unchecked, try_inverse};
use mesh_types::Polygon;
use nalgebra::{Matrix3, Point3, Vector3};

use crate::error::{SweepError, SweepResult};
use crate::frame::SweepFrame;

/// Express every profile point in the coordinates of `reference`.
///
/// The profile is drawn in world space where the rail starts; localizing it
/// against the first frame lets every later frame re-place it. A singular
/// reference frame yields non-finite coordinates.
#[must_use]
pub fn localize_profile(profile: &Polygon, reference: &SweepFrame) -> Vec<Vector3<f64>> {
    localize_with(profile, reference, &inverse_unchecked(&reference.matrix()))
}

/// Checked form of [`localize_profile`].
///
/// # Errors
///
/// Returns [`SweepError::NonFiniteProfilePoint`] for a profile point with a
/// non-finite coordinate and [`SweepError::SingularFrame`] (index 0) if the
/// reference frame cannot be inverted.
pub fn try_localize_profile(
    profile: &Polygon,
    reference: &SweepFrame,
) -> SweepResult<Vec<Vector3<f64>>> {
    if let Some(index) = profile
        .iter()
        .position(|p| !p.iter().all(|c| c.is_finite()))
    {
        return Err(SweepError::NonFiniteProfilePoint { index });
    }

    let inverse = try_inverse(&reference.matrix()).map_err(|e| match e {
        KernelError::Singular { determinant } => SweepError::SingularFrame {
            index: 0,
            determinant,
        },
        other => SweepError::Kernel(other),
    })?;
    Ok(localize_with(profile, reference, &inverse))
}

fn localize_with(
    profile: &Polygon,
    reference: &SweepFrame,
    inverse: &Matrix3<f64>,
) -> Vec<Vector3<f64>> {
    profile
        .iter()
        .map(|p| inverse * (p - reference.origin))
        .collect()
}

/// A circle in the plane `y = center.y`, sampled at `segments` points.
///
/// Point `i` sits at angle `i * 2π / segments` measured from +X toward +Z.
/// The first point is not repeated at the end.
///
/// # Example
///
/// ```
/// use mesh_sweep::circle_xz;
/// use nalgebra::Point3;
///
/// let circle = circle_xz(Point3::new(3.0, 0.0, 0.0), 1.0, 100);
/// assert_eq!(circle.len(), 100);
/// assert!(!circle.is_explicitly_closed());
/// assert_eq!(circle[0], Point3::new(4.0, 0.0, 0.0));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn circle_xz(center: Point3<f64>, radius: f64, segments: usize) -> Polygon {
    let step = TAU / segments as f64;
    (0..segments)
        .map(|i| {
            let (sin, cos) = (i as f64 * step).sin_cos();
            center + Vector3::new(radius * cos, 0.0, radius * sin)
        })
        .collect()
}

/// An axis-aligned rectangle in the plane `y = center.y`.
///
/// `width` runs along X and `height` along Z. The polygon is explicitly
/// closed: five points with the first repeated last.
///
/// # Example
///
/// ```
/// use mesh_sweep::rectangle_xz;
/// use nalgebra::Point3;
///
/// let rect = rectangle_xz(Point3::new(2.0, 0.0, 0.0), 0.5, 0.25);
/// assert_eq!(rect.len(), 5);
/// assert!(rect.is_explicitly_closed());
/// assert_eq!(rect[0], Point3::new(2.25, 0.0, 0.125));
/// ```
#[must_use]
pub fn rectangle_xz(center: Point3<f64>, width: f64, height: f64) -> Polygon {
    let a = width / 2.0;
    let b = height / 2.0;
    Polygon::new(vec![
        center + Vector3::new(a, 0.0, b),
        center + Vector3::new(-a, 0.0, b),
        center + Vector3::new(-a, 0.0, -b),
        center + Vector3::new(a, 0.0, -b),
        center + Vector3::new(a, 0.0, b),
    ])
}
