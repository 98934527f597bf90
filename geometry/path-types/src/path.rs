//! Sampled paths.
//!
//! A [`Path`] is an ordered list of [`PathSample`]s. Each sample pairs a
//! position with a tangent; the tangent carries direction (and, for analytic
//! generators, the derivative's magnitude) and is never normalized here.

use std::ops::Index;

use kernel_types::is_finite;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PathError, Result};

/// One sample of a path: a position and its tangent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathSample {
    /// Position on the curve.
    pub position: Point3<f64>,
    /// Tangent (derivative) at the position, not necessarily unit length.
    pub tangent: Vector3<f64>,
}

impl PathSample {
    /// Create a sample.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>, tangent: Vector3<f64>) -> Self {
        Self { position, tangent }
    }

    /// Check that position and tangent are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        is_finite(&self.position.coords) && is_finite(&self.tangent)
    }
}

/// An ordered sequence of path samples.
///
/// Order defines the direction of travel. Paths are built by the generators
/// in this crate ([`line`](crate::line), [`arc`](crate::arc), ...) or by
/// concatenating and transforming existing paths.
///
/// # Example
///
/// ```
/// use path_types::{line, Path};
/// use nalgebra::Point3;
///
/// let path: Path = line(Point3::origin(), Point3::new(0.0, 0.0, 4.0), 5);
/// assert_eq!(path.len(), 5);
/// assert_eq!(path[2].position, Point3::new(0.0, 0.0, 2.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    samples: Vec<PathSample>,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty path with room for `capacity` samples.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Create a path from samples.
    #[must_use]
    pub fn from_samples(samples: Vec<PathSample>) -> Self {
        Self { samples }
    }

    /// Append a sample.
    pub fn push(&mut self, position: Point3<f64>, tangent: Vector3<f64>) {
        self.samples.push(PathSample::new(position, tangent));
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the path has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First sample.
    #[must_use]
    pub fn first(&self) -> Option<&PathSample> {
        self.samples.first()
    }

    /// Last sample.
    #[must_use]
    pub fn last(&self) -> Option<&PathSample> {
        self.samples.last()
    }

    /// Sample at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PathSample> {
        self.samples.get(index)
    }

    /// All samples as a slice.
    #[must_use]
    pub fn samples(&self) -> &[PathSample] {
        &self.samples
    }

    /// Consume the path, returning its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<PathSample> {
        self.samples
    }

    /// Iterate over the samples.
    pub fn iter(&self) -> std::slice::Iter<'_, PathSample> {
        self.samples.iter()
    }

    /// Iterate over sample positions.
    pub fn positions(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.samples.iter().map(|s| s.position)
    }

    /// Iterate over sample tangents.
    pub fn tangents(&self) -> impl Iterator<Item = Vector3<f64>> + '_ {
        self.samples.iter().map(|s| s.tangent)
    }

    /// Map every sample, keeping order.
    #[must_use]
    pub fn map_samples(&self, f: impl FnMut(&PathSample) -> PathSample) -> Self {
        self.samples.iter().map(f).collect()
    }

    /// Sum of the distances between consecutive positions.
    #[must_use]
    pub fn polyline_length(&self) -> f64 {
        self.samples
            .windows(2)
            .map(|w| (w[1].position - w[0].position).norm())
            .sum()
    }

    /// Check that every sample is finite.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NonFinite`] with the index of the first sample
    /// holding an infinite or NaN component.
    pub fn check_finite(&self) -> Result<()> {
        match self.samples.iter().position(|s| !s.is_finite()) {
            Some(index) => Err(PathError::NonFinite { index }),
            None => Ok(()),
        }
    }
}

impl Index<usize> for Path {
    type Output = PathSample;

    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}

impl FromIterator<PathSample> for Path {
    fn from_iter<I: IntoIterator<Item = PathSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl Extend<PathSample> for Path {
    fn extend<I: IntoIterator<Item = PathSample>>(&mut self, iter: I) {
        self.samples.extend(iter);
    }
}

impl IntoIterator for Path {
    type Item = PathSample;
    type IntoIter = std::vec::IntoIter<PathSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSample;
    type IntoIter = std::slice::Iter<'a, PathSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Linearly spaced parameters from `start` to `end` inclusive.
///
/// With `n == 1` the spacing divides by zero and the single parameter is
/// NaN; callers that need a guarantee go through the `try_` generators.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = (usize, f64)> {
    let step = (end - start) / (n as f64 - 1.0);
    (0..n).map(move |i| (i, start + i as f64 * step))
}
