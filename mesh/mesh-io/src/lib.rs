//! STL file I/O for swept triangle meshes.
//!
//! This crate writes and reads [`TriangleMesh`](mesh_types::TriangleMesh)
//! values as STL, the triangle-soup format every slicer and mesh viewer
//! understands:
//!
//! - **ASCII** - `solid`/`facet`/`endsolid` text, coordinates in scientific
//!   notation
//! - **Binary** - 80-byte header, triangle count, 50-byte records
//!
//! Triangle order is preserved in both directions, so a swept mesh read back
//! from disk lists its triangles exactly as the sweep produced them.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_stl, save_stl, StlEncoding};
//!
//! let mesh = load_stl("model.stl").unwrap();
//! save_stl(&mesh, "copy.stl", StlEncoding::Binary).unwrap();
//! ```
//!
//! Writers take any [`std::io::Write`], which is convenient for tests and
//! for streaming to stdout:
//!
//! ```
//! use mesh_io::write_stl_ascii;
//! use mesh_types::TriangleMesh;
//!
//! let mut out = Vec::new();
//! write_stl_ascii(&TriangleMesh::new(), "empty", &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "solid empty\nendsolid empty\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{StlEncoding, load_stl, read_stl, save_stl, write_stl_ascii, write_stl_binary};
