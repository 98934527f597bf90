//! STL (Stereolithography) file format support.
//!
//! Supports both ASCII and binary STL formats.
//!
//! # Format Detection
//!
//! The loader detects whether a file is ASCII or binary:
//! - Binary files have an 80-byte header, a triangle count, and exactly
//!   `84 + 50 * count` bytes in total
//! - Anything else that starts with "solid" (after optional whitespace) is
//!   read as ASCII
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use mesh_types::{Triangle, TriangleMesh};
use nalgebra::{Point3, Vector3};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle in binary STL (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Solid name used when none can be derived from the output path.
const DEFAULT_SOLID_NAME: &str = "mesh";

/// On-disk STL flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StlEncoding {
    /// Human-readable text.
    #[default]
    Ascii,
    /// Compact little-endian binary.
    Binary,
}

/// Write a mesh as ASCII STL.
///
/// Coordinates use C-style scientific notation: six fractional digits and a
/// signed exponent of at least two digits (`-2.500000e-01`).
/// Degenerate triangles are written with a zero normal.
///
/// # Errors
///
/// Returns an error if the writer fails.
///
/// # Example
///
/// ```
/// use mesh_io::write_stl_ascii;
/// use mesh_types::{Triangle, TriangleMesh};
///
/// let mesh: TriangleMesh = std::iter::once(Triangle::from_arrays(
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
/// ))
/// .collect();
///
/// let mut out = Vec::new();
/// write_stl_ascii(&mesh, "tri", &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("solid tri"));
/// assert!(text.contains("facet normal 0.000000e+00 0.000000e+00 1.000000e+00"));
/// ```
pub fn write_stl_ascii<W: Write>(mesh: &TriangleMesh, name: &str, mut writer: W) -> IoResult<()> {
    debug!(triangles = mesh.len(), encoding = "ascii", "Writing STL");

    writeln!(writer, "solid {name}")?;

    for tri in mesh {
        let n = facet_normal(tri);
        writeln!(
            writer,
            "  facet normal {} {} {}",
            Sci(n.x),
            Sci(n.y),
            Sci(n.z)
        )?;
        writeln!(writer, "    outer loop")?;
        for v in tri.vertices() {
            writeln!(writer, "      vertex {} {} {}", Sci(v.x), Sci(v.y), Sci(v.z))?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {name}")?;
    writer.flush()?;

    Ok(())
}

/// Write a mesh as binary STL.
///
/// # Errors
///
/// Returns [`IoError::TooManyTriangles`] if the triangle count does not fit
/// in a `u32`, or an I/O error if the writer fails.
pub fn write_stl_binary<W: Write>(mesh: &TriangleMesh, mut writer: W) -> IoResult<()> {
    debug!(triangles = mesh.len(), encoding = "binary", "Writing STL");

    let count = u32::try_from(mesh.len())
        .map_err(|_| IoError::TooManyTriangles { count: mesh.len() })?;

    // Header padded with spaces
    let mut header = [b' '; HEADER_SIZE];
    let text = b"Binary STL generated by mesh-io";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;
    writer.write_all(&count.to_le_bytes())?;

    for tri in mesh {
        write_vector_binary(&mut writer, &facet_normal(tri))?;
        for v in tri.vertices() {
            write_vector_binary(&mut writer, &v.coords)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Save a mesh to an STL file.
///
/// ASCII output names the solid after the file stem.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use mesh_io::{save_stl, StlEncoding};
/// use mesh_types::TriangleMesh;
///
/// let mesh = TriangleMesh::new();
/// save_stl(&mesh, "output.stl", StlEncoding::Binary).unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(
    mesh: &TriangleMesh,
    path: P,
    encoding: StlEncoding,
) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), ?encoding, "Saving STL");

    let writer = BufWriter::new(File::create(path)?);
    match encoding {
        StlEncoding::Ascii => {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(DEFAULT_SOLID_NAME);
            write_stl_ascii(mesh, name, writer)
        }
        StlEncoding::Binary => write_stl_binary(mesh, writer),
    }
}

/// Load a mesh from an STL file.
///
/// Automatically detects ASCII vs binary format. Triangle order is
/// preserved; stored normals are ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content is not valid STL
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_stl;
///
/// let mesh = load_stl("model.stl").unwrap();
/// println!("Loaded {} triangles", mesh.len());
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<TriangleMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let mesh = read_stl(file)?;
    debug!(path = %path.display(), triangles = mesh.len(), "Loaded STL");
    Ok(mesh)
}

/// Read an STL mesh from any reader, detecting the encoding.
///
/// # Errors
///
/// Returns an error if reading fails or the content is not valid STL.
pub fn read_stl<R: Read>(mut reader: R) -> IoResult<TriangleMesh> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if looks_like_ascii(&bytes) {
        parse_ascii(&String::from_utf8_lossy(&bytes))
    } else {
        parse_binary(&bytes)
    }
}

/// Binary files that happen to start with "solid" are recognised by their
/// exact size.
fn looks_like_ascii(bytes: &[u8]) -> bool {
    let starts_with_solid = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .is_some_and(|start| bytes[start..].starts_with(b"solid"));

    starts_with_solid && binary_count(bytes).is_none_or(|count| binary_len(count) != bytes.len())
}

fn binary_count(bytes: &[u8]) -> Option<u32> {
    let raw = bytes.get(HEADER_SIZE..HEADER_SIZE + 4)?;
    Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

fn binary_len(count: u32) -> usize {
    HEADER_SIZE + 4 + TRIANGLE_SIZE * count as usize
}

fn parse_binary(bytes: &[u8]) -> IoResult<TriangleMesh> {
    let count = binary_count(bytes).ok_or(IoError::InvalidHeader {
        expected: HEADER_SIZE + 4,
        got: bytes.len(),
    })?;

    let records = bytes[HEADER_SIZE + 4..].chunks_exact(TRIANGLE_SIZE);
    #[allow(clippy::cast_possible_truncation)] // bounded by `count`
    let available = records.len().min(count as usize) as u32;
    if available < count {
        return Err(IoError::InvalidTriangleCount {
            expected: count,
            got: available,
        });
    }

    // Skip the 12-byte normal of each record
    Ok(records
        .take(count as usize)
        .map(|rec| {
            Triangle::new(
                read_point(&rec[12..24]),
                read_point(&rec[24..36]),
                read_point(&rec[36..48]),
            )
        })
        .collect())
}

fn parse_ascii(text: &str) -> IoResult<TriangleMesh> {
    let mut mesh = TriangleMesh::new();
    let mut in_loop = false;
    let mut facet: Vec<Point3<f64>> = Vec::with_capacity(3);

    for (line_no, line) in text.lines().enumerate() {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        match keyword.to_ascii_lowercase().as_str() {
            "outer" => {
                in_loop = true;
                facet.clear();
            }
            "vertex" if in_loop => {
                let coords: Vec<f64> = parts
                    .take(3)
                    .map(str::parse::<f64>)
                    .collect::<Result<_, _>>()?;
                if coords.len() != 3 {
                    return Err(IoError::invalid_content(format!(
                        "line {}: vertex needs three coordinates",
                        line_no + 1
                    )));
                }
                facet.push(Point3::new(coords[0], coords[1], coords[2]));
            }
            "endloop" => in_loop = false,
            "endfacet" => {
                if facet.len() != 3 {
                    return Err(IoError::invalid_content(format!(
                        "line {}: facet has {} vertices",
                        line_no + 1,
                        facet.len()
                    )));
                }
                mesh.push(Triangle::new(facet[0], facet[1], facet[2]));
                facet.clear();
            }
            "endsolid" => break,
            _ => {}
        }
    }

    Ok(mesh)
}

/// `%e` formatting: `{:.6e}` with the exponent signed and padded to two
/// digits.
struct Sci(f64);

impl fmt::Display for Sci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.6e}", self.0);
        match text.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = exp.strip_prefix('-').map_or(("+", exp), |d| ("-", d));
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            // inf and NaN have no exponent
            None => f.write_str(&text),
        }
    }
}

/// Unit normal, or zero for degenerate triangles.
fn facet_normal(tri: &Triangle) -> Vector3<f64> {
    tri.normal().unwrap_or_else(Vector3::zeros)
}

/// Write a vector as 3 f32s in little-endian.
#[allow(clippy::cast_possible_truncation)] // STL stores f32
fn write_vector_binary<W: Write>(writer: &mut W, v: &Vector3<f64>) -> IoResult<()> {
    for c in [v.x as f32, v.y as f32, v.z as f32] {
        writer.write_all(&c.to_le_bytes())?;
    }
    Ok(())
}

/// Read a point from 12 bytes (3 f32s).
fn read_point(buf: &[u8]) -> Point3<f64> {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Point3::new(f64::from(x), f64::from(y), f64::from(z))
}
