//! Straight line paths.

use nalgebra::Point3;

use crate::{Path, PathError, Result};

/// Sample the segment from `start` to `end` with `n` evenly spaced samples.
///
/// Every sample carries the same un-normalized tangent `end - start`.
/// The first sample is exactly `start` and the last exactly `end`.
///
/// No validation: `n == 1` yields a NaN position. See [`try_line`].
///
/// # Example
///
/// ```
/// use path_types::line;
/// use nalgebra::{Point3, Vector3};
///
/// let path = line(Point3::origin(), Point3::new(0.0, 5.0, 0.0), 6);
/// assert_eq!(path.len(), 6);
/// assert!((path[1].position - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
/// assert_eq!(path[1].tangent, Vector3::new(0.0, 5.0, 0.0));
/// ```
#[must_use]
pub fn line(start: Point3<f64>, end: Point3<f64>, n: usize) -> Path {
    let dir = end - start;
    let last = n as f64 - 1.0;

    let mut path = Path::with_capacity(n);
    for i in 0..n {
        path.push(start.lerp(&end, i as f64 / last), dir);
    }
    path
}

/// Checked form of [`line`].
///
/// # Errors
///
/// Returns [`PathError::TooFewSamples`] if `n < 2`.
pub fn try_line(start: Point3<f64>, end: Point3<f64>, n: usize) -> Result<Path> {
    if n < 2 {
        return Err(PathError::too_few_samples(n));
    }
    Ok(line(start, end, n))
}
