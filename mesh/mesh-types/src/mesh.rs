//! Triangle soup mesh.

use std::ops::Index;

use crate::{Aabb, MeshBounds, Triangle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of triangles.
///
/// Triangles are stored by value and never share vertices. Insertion order
/// is preserved so serialized output is deterministic.
///
/// # Example
///
/// ```
/// use mesh_types::{TriangleMesh, Triangle, MeshBounds};
///
/// let mut mesh = TriangleMesh::new();
/// mesh.push(Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]));
/// mesh.push(Triangle::from_arrays([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]));
///
/// assert_eq!(mesh.len(), 2);
/// assert!((mesh.surface_area() - 1.0).abs() < 1e-12);
/// assert_eq!(mesh.bounds().max.x, 1.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Create an empty mesh with room for `capacity` triangles.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    /// Create a mesh from triangles in order.
    #[must_use]
    pub const fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Append a triangle.
    #[inline]
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Move every triangle of `other` to the end of this mesh.
    pub fn append(&mut self, other: &mut Self) {
        self.triangles.append(&mut other.triangles);
    }

    /// Reserve room for `additional` more triangles.
    pub fn reserve(&mut self, additional: usize) {
        self.triangles.reserve(additional);
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the mesh has no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The triangles as a slice.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Consume the mesh, returning its triangles.
    #[must_use]
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// Iterate over the triangles in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Sum of the triangle areas.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Check that every coordinate of every triangle is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.triangles.iter().all(Triangle::is_finite)
    }

    /// Index of the first triangle with a non-finite coordinate.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.triangles.iter().position(|t| !t.is_finite())
    }

    /// Reverse the winding of every triangle.
    pub fn flip_winding(&mut self) {
        for tri in &mut self.triangles {
            *tri = tri.reversed();
        }
    }
}

impl MeshBounds for TriangleMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.triangles.iter().flat_map(|t| [&t.v0, &t.v1, &t.v2]))
    }
}

impl Index<usize> for TriangleMesh {
    type Output = Triangle;

    fn index(&self, index: usize) -> &Self::Output {
        &self.triangles[index]
    }
}

impl Extend<Triangle> for TriangleMesh {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl FromIterator<Triangle> for TriangleMesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self::from_triangles(iter.into_iter().collect())
    }
}

impl IntoIterator for TriangleMesh {
    type Item = Triangle;
    type IntoIter = std::vec::IntoIter<Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}

impl<'a> IntoIterator for &'a TriangleMesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    fn unit_square() -> TriangleMesh {
        [
            Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]),
            Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = TriangleMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.len(), 0);
        assert!(mesh.bounds().is_empty());
        assert!(mesh.bounds_opt().is_none());
        assert!(mesh.is_finite());
        assert_relative_eq!(mesh.surface_area(), 0.0);
    }

    #[test]
    fn test_order_preserved() {
        let mesh = unit_square();
        assert_eq!(mesh[0].v2, Point3::new(1.0, 1.0, 0.0));
        assert_eq!(mesh[1].v2, Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_bounds_and_area() {
        let mesh = unit_square();
        let bounds = mesh.bounds();
        assert_eq!(bounds.min, Point3::origin());
        assert_eq!(bounds.max, Point3::new(1.0, 1.0, 0.0));
        assert_relative_eq!(mesh.center(), Point3::new(0.5, 0.5, 0.0));
        assert_relative_eq!(mesh.surface_area(), 1.0);
    }

    #[test]
    fn test_flip_winding() {
        let mut mesh = unit_square();
        mesh.flip_winding();
        for tri in &mesh {
            assert_eq!(tri.normal(), Some(-Vector3::z()));
        }
    }

    #[test]
    fn test_append_and_extend() {
        let mut mesh = unit_square();
        let mut other = unit_square();
        mesh.append(&mut other);
        assert_eq!(mesh.len(), 4);
        assert!(other.is_empty());

        mesh.extend(unit_square());
        assert_eq!(mesh.len(), 6);
    }

    #[test]
    fn test_non_finite_detection() {
        let mut mesh = unit_square();
        mesh.push(Triangle::from_arrays([f64::NAN, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]));
        assert!(!mesh.is_finite());
        assert_eq!(mesh.first_non_finite(), Some(2));
    }
}
