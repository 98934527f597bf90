//! Cross-section polygons.

use std::ops::Index;

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Aabb;

/// Distance below which the last point counts as a repeat of the first.
pub const CLOSURE_TOLERANCE: f64 = 1e-9;

/// An ordered ring of points describing a sweep cross-section.
///
/// The ring is closed by convention: the last point connects back to the
/// first. Repeating the first point at the end is also allowed; such a
/// polygon is "explicitly closed" and its closing edge has zero length.
///
/// # Example
///
/// ```
/// use mesh_types::{Polygon, Point3};
///
/// let square = Polygon::new(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 1.0),
///     Point3::new(0.0, 0.0, 1.0),
/// ]);
/// assert_eq!(square.len(), 4);
/// assert!(!square.is_explicitly_closed());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    points: Vec<Point3<f64>>,
}

impl Polygon {
    /// Create a polygon from its points in order.
    #[must_use]
    pub const fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    /// Number of points, counting a repeated closing point.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polygon has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Consume the polygon, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3<f64>> {
        self.points
    }

    /// Iterate over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3<f64>> {
        self.points.iter()
    }

    /// Check whether the last point repeats the first.
    #[must_use]
    pub fn is_explicitly_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => {
                (last - first).norm() <= CLOSURE_TOLERANCE
            }
            _ => false,
        }
    }

    /// Number of points without the repeated closing point.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        if self.is_explicitly_closed() {
            self.points.len() - 1
        } else {
            self.points.len()
        }
    }

    /// Mean of the distinct points, or `None` for an empty polygon.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Option<Point3<f64>> {
        let distinct = &self.points[..self.distinct_len()];
        if distinct.is_empty() {
            return None;
        }
        let sum = distinct
            .iter()
            .fold(nalgebra::Vector3::zeros(), |acc, p| acc + p.coords);
        Some(Point3::from(sum / distinct.len() as f64))
    }

    /// Bounding box of the points.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.points.iter())
    }
}

impl Index<usize> for Polygon {
    type Output = Point3<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl From<Vec<Point3<f64>>> for Polygon {
    fn from(points: Vec<Point3<f64>>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point3<f64>> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point3<f64>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point3<f64>;
    type IntoIter = std::slice::Iter<'a, Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
