//! Guided frames along a rail.
//!
//! At every sample the frame's Z axis follows the rail tangent and its X
//! axis points at the guide. Unlike parallel transport, the roll of the
//! frame is dictated entirely by the guide path, so the same profile can be
//! twisted, scaled or kept upright by choosing a different guide.

use kernel_types::{
    KernelError, cross, from_columns, inverse_unchecked, normalize_unchecked, try_inverse,
    try_normalize,
};
use nalgebra::{Matrix3, Point3, Vector3};
use path_types::{Path, PathSample};

use crate::config::FrameMode;
use crate::error::{SweepError, SweepResult};

/// A frame anchored at a rail sample.
///
/// The columns `(x, y, z)` map profile-local coordinates to world space:
/// `world = origin + x * l.x + y * l.y + z * l.z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepFrame {
    /// Rail position.
    pub origin: Point3<f64>,
    /// Toward the guide.
    pub x: Vector3<f64>,
    /// Completes the frame, `z × x` (normalized in orthonormal mode).
    pub y: Vector3<f64>,
    /// Unit rail tangent.
    pub z: Vector3<f64>,
}

impl SweepFrame {
    /// Build the frame for one rail sample and its matching guide sample.
    ///
    /// A zero tangent or a guide offset parallel to it yields non-finite or
    /// degenerate axes. See [`try_from_samples`](Self::try_from_samples).
    #[must_use]
    pub fn from_samples(rail: &PathSample, guide: &PathSample, mode: FrameMode) -> Self {
        let z = normalize_unchecked(&rail.tangent);
        let x = guide.position - rail.position;
        match mode {
            FrameMode::Skewed => Self {
                origin: rail.position,
                x,
                y: cross(&z, &x),
                z,
            },
            FrameMode::Orthonormal => {
                let y = normalize_unchecked(&cross(&z, &x));
                Self {
                    origin: rail.position,
                    x: cross(&y, &z),
                    y,
                    z,
                }
            }
        }
    }

    /// Checked form of [`from_samples`](Self::from_samples).
    ///
    /// `index` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::DegenerateTangent`] if the rail tangent cannot be
    /// normalized and [`SweepError::SingularFrame`] if the guide offset is
    /// zero or (nearly) parallel to the tangent.
    pub fn try_from_samples(
        rail: &PathSample,
        guide: &PathSample,
        mode: FrameMode,
        index: usize,
    ) -> SweepResult<Self> {
        try_normalize(&rail.tangent).map_err(|_| SweepError::DegenerateTangent { index })?;

        // The orthonormal frame is undefined exactly when the skewed one is
        // singular.
        let skewed = Self::from_samples(rail, guide, FrameMode::Skewed);
        try_inverse(&skewed.matrix()).map_err(|e| match e {
            KernelError::Singular { determinant } => {
                SweepError::SingularFrame { index, determinant }
            }
            other => SweepError::Kernel(other),
        })?;

        Ok(match mode {
            FrameMode::Skewed => skewed,
            FrameMode::Orthonormal => Self::from_samples(rail, guide, mode),
        })
    }

    /// Frame axes as matrix columns.
    #[must_use]
    pub fn matrix(&self) -> Matrix3<f64> {
        from_columns(&self.x, &self.y, &self.z)
    }

    /// Map a profile-local vector to a world position.
    #[inline]
    #[must_use]
    pub fn place(&self, local: &Vector3<f64>) -> Point3<f64> {
        self.origin + self.x * local.x + self.y * local.y + self.z * local.z
    }

    /// Map a world position into this frame's local coordinates.
    ///
    /// A singular frame yields non-finite coordinates.
    #[must_use]
    pub fn localize(&self, point: &Point3<f64>) -> Vector3<f64> {
        inverse_unchecked(&self.matrix()) * (point - self.origin)
    }
}

/// Compute a frame at every rail sample.
///
/// Rail and guide are consumed in lockstep; extra samples on the longer
/// path are ignored.
///
/// # Example
///
/// ```
/// use mesh_sweep::{guided_frames, FrameMode};
/// use nalgebra::{Point3, Vector3};
/// use path_types::{line, translate};
///
/// let rail = line(Point3::origin(), Point3::new(0.0, 0.0, 4.0), 5);
/// let guide = translate(&rail, &Vector3::new(2.0, 0.0, 0.0));
///
/// let frames = guided_frames(&rail, &guide, FrameMode::Skewed);
/// assert_eq!(frames.len(), 5);
/// assert_eq!(frames[0].x, Vector3::new(2.0, 0.0, 0.0));
/// assert_eq!(frames[0].z, Vector3::z());
/// ```
#[must_use]
pub fn guided_frames(rail: &Path, guide: &Path, mode: FrameMode) -> Vec<SweepFrame> {
    rail.iter()
        .zip(guide.iter())
        .map(|(r, g)| SweepFrame::from_samples(r, g, mode))
        .collect()
}

/// Checked form of [`guided_frames`], failing on the first bad sample.
///
/// # Errors
///
/// Returns [`SweepError::PathLengthMismatch`] if the paths differ in length,
/// otherwise the first error from [`SweepFrame::try_from_samples`].
pub fn try_guided_frames(
    rail: &Path,
    guide: &Path,
    mode: FrameMode,
) -> SweepResult<Vec<SweepFrame>> {
    if rail.len() != guide.len() {
        return Err(SweepError::PathLengthMismatch {
            rail: rail.len(),
            guide: guide.len(),
        });
    }
    rail.iter()
        .zip(guide.iter())
        .enumerate()
        .map(|(i, (r, g))| SweepFrame::try_from_samples(r, g, mode, i))
        .collect()
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(p: [f64; 3], t: [f64; 3]) -> PathSample {
        PathSample::new(Point3::from(p), Vector3::from(t))
    }

    #[test]
    fn test_skewed_frame_axes() {
        let rail = sample([0.0, 0.0, 0.0], [0.0, 5.0, 0.0]);
        let guide = sample([1.0, 0.0, 0.0], [0.0, 5.0, 0.0]);
        let frame = SweepFrame::from_samples(&rail, &guide, FrameMode::Skewed);

        assert_relative_eq!(frame.z, Vector3::y());
        assert_relative_eq!(frame.x, Vector3::x());
        assert_relative_eq!(frame.y, -Vector3::z());
    }

    #[test]
    fn test_skewed_frame_keeps_guide_distance() {
        let rail = sample([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let guide = sample([3.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let frame = SweepFrame::from_samples(&rail, &guide, FrameMode::Skewed);

        assert_relative_eq!(frame.x.norm(), 3.0);
        assert_relative_eq!(frame.y.norm(), 3.0);
    }

    #[test]
    fn test_orthonormal_frame() {
        let rail = sample([1.0, 2.0, 3.0], [0.0, 0.0, 2.0]);
        // Offset not perpendicular to the tangent and not unit length
        let guide = sample([4.0, 2.0, 5.0], [0.0, 0.0, 2.0]);
        let frame = SweepFrame::from_samples(&rail, &guide, FrameMode::Orthonormal);

        let m = frame.matrix();
        assert_relative_eq!(m.transpose() * m, Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.x, Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn test_place_and_localize_round_trip() {
        let rail = sample([1.0, -2.0, 0.5], [0.3, 0.2, 1.0]);
        let guide = sample([2.0, -1.0, 0.0], [0.3, 0.2, 1.0]);
        let frame = SweepFrame::from_samples(&rail, &guide, FrameMode::Skewed);

        let p = Point3::new(0.7, 3.1, -2.2);
        assert_relative_eq!(frame.place(&frame.localize(&p)), p, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_tangent() {
        let rail = sample([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
        let guide = sample([1.0, 0.0, 0.0], [0.0, 0.0, 0.0]);

        let frame = SweepFrame::from_samples(&rail, &guide, FrameMode::Skewed);
        assert!(frame.z.iter().all(|c| c.is_nan()));

        let err = SweepFrame::try_from_samples(&rail, &guide, FrameMode::Skewed, 3);
        assert_eq!(err, Err(SweepError::DegenerateTangent { index: 3 }));
    }

    #[test]
    fn test_guide_on_rail_is_singular() {
        let rail = sample([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let guide = sample([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let err = SweepFrame::try_from_samples(&rail, &guide, FrameMode::Orthonormal, 0);
        assert!(matches!(err, Err(SweepError::SingularFrame { index: 0, .. })));
    }

    #[test]
    fn test_guide_along_tangent_is_singular() {
        let rail = sample([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let guide = sample([0.0, 0.0, 2.0], [0.0, 0.0, 1.0]);
        let err = SweepFrame::try_from_samples(&rail, &guide, FrameMode::Skewed, 9);
        assert!(matches!(err, Err(SweepError::SingularFrame { index: 9, .. })));
    }

    #[test]
    fn test_try_guided_frames() {
        let rail = path_types::line(Point3::origin(), Point3::new(0.0, 6.0, 0.0), 4);
        let guide = path_types::line(Point3::new(3.0, 0.0, 0.0), Point3::new(1.0, 6.0, 0.0), 4);
        let frames = try_guided_frames(&rail, &guide, FrameMode::Skewed).expect("valid paths");
        assert_eq!(frames, guided_frames(&rail, &guide, FrameMode::Skewed));

        let short = path_types::line(Point3::new(3.0, 0.0, 0.0), Point3::new(1.0, 6.0, 0.0), 3);
        assert_eq!(
            try_guided_frames(&rail, &short, FrameMode::Skewed),
            Err(SweepError::PathLengthMismatch { rail: 4, guide: 3 })
        );
        assert_eq!(guided_frames(&rail, &short, FrameMode::Skewed).len(), 3);
    }
}
