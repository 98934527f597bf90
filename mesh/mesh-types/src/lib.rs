//! Core mesh types for path extrusion.
//!
//! - [`Polygon`] - The cross-section swept along a path
//! - [`Triangle`] - Three ordered vertex positions
//! - [`TriangleMesh`] - An ordered triangle soup, the output of a sweep
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Coordinate System
//!
//! Right-handed. A triangle's normal is `(v1 - v0) × (v2 - v0)`, so
//! counter-clockwise vertices face the viewer.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Triangle, TriangleMesh, Point3};
//!
//! let mut mesh = TriangleMesh::new();
//! mesh.push(Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ));
//!
//! assert_eq!(mesh.len(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod polygon;
mod traits;
mod triangle;

pub use bounds::Aabb;
pub use mesh::TriangleMesh;
pub use polygon::{CLOSURE_TOLERANCE, Polygon};
pub use traits::MeshBounds;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
