//! End caps: triangle fans closing the first and last ring.

use mesh_types::Triangle;
use nalgebra::Point3;

/// Which end of the sweep a cap closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CapEnd {
    Start,
    End,
}

/// Fan-triangulate the first `distinct` points of `ring` around their
/// centroid.
///
/// The start cap faces against the rail direction and the end cap along it
/// when the side walls use consistent winding.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn fan(ring: &[Point3<f64>], distinct: usize, end: CapEnd) -> Vec<Triangle> {
    let ring = &ring[..distinct.min(ring.len())];
    if ring.len() < 3 {
        return Vec::new();
    }

    let center = Point3::from(
        ring.iter()
            .fold(nalgebra::Vector3::zeros(), |acc, p| acc + p.coords)
            / ring.len() as f64,
    );

    let mut prev = ring[ring.len() - 1];
    let mut triangles = Vec::with_capacity(ring.len());
    for &curr in ring {
        triangles.push(match end {
            CapEnd::Start => Triangle::new(center, curr, prev),
            CapEnd::End => Triangle::new(center, prev, curr),
        });
        prev = curr;
    }
    triangles
}
