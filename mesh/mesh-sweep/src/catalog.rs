//! Built-in demonstration models.
//!
//! Each entry sweeps a fixed profile along fixed rail and guide paths. The
//! caller's [`SweepConfig`] decides frame mode, winding, caps and
//! parallelism.

use std::f64::consts::{FRAC_PI_2, PI};

use mesh_types::TriangleMesh;
use nalgebra::Point3;
use path_types::{arc, concat, elliptical_arc, helix, line};

use crate::config::SweepConfig;
use crate::error::SweepResult;
use crate::profile::{circle_xz, rectangle_xz};
use crate::sweep::sweep;

/// Profile resolution of the circular catalog profiles.
pub const CIRCLE_SEGMENTS: usize = 100;

/// A named, parameterless model.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Short identifier, used on the command line.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    builder: fn(&SweepConfig) -> SweepResult<TriangleMesh>,
}

impl CatalogEntry {
    /// Build the model's mesh.
    ///
    /// # Errors
    ///
    /// Propagates any [`SweepError`](crate::SweepError) from the sweep.
    pub fn build(&self, config: &SweepConfig) -> SweepResult<TriangleMesh> {
        (self.builder)(config)
    }
}

static CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        name: "pipe",
        description: "A pipe",
        builder: pipe,
    },
    CatalogEntry {
        name: "ell_torus",
        description: "An (open) elliptic torus",
        builder: ell_torus,
    },
    CatalogEntry {
        name: "funnel",
        description: "A funnel",
        builder: funnel,
    },
    CatalogEntry {
        name: "spring",
        description: "A spring",
        builder: spring,
    },
];

/// All catalog entries in listing order.
///
/// # Example
///
/// ```
/// let names: Vec<_> = mesh_sweep::catalog().iter().map(|e| e.name).collect();
/// assert_eq!(names, ["pipe", "ell_torus", "funnel", "spring"]);
/// ```
#[must_use]
pub fn catalog() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Look up a catalog entry by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.name == name)
}

/// Unit circle swept up a straight line then around a quarter bend.
///
/// # Errors
///
/// Propagates sweep errors; none occur for the fixed parameters.
pub fn pipe(config: &SweepConfig) -> SweepResult<TriangleMesh> {
    let profile = circle_xz(Point3::origin(), 1.0, CIRCLE_SEGMENTS);

    let rail = concat(
        &line(Point3::origin(), Point3::new(0.0, 5.0, 0.0), 100),
        &arc(0.0, FRAC_PI_2, 2.0, Point3::new(-2.0, 5.0, 0.0), 100),
    );
    let guide = concat(
        &line(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 5.0, 0.0), 100),
        &arc(0.0, FRAC_PI_2, 3.0, Point3::new(-2.0, 5.0, 0.0), 100),
    );

    sweep(&profile, &rail, &guide, config)
}

/// Circle swept three quarters of the way around an ellipse.
///
/// # Errors
///
/// Propagates sweep errors; none occur for the fixed parameters.
pub fn ell_torus(config: &SweepConfig) -> SweepResult<TriangleMesh> {
    let profile = circle_xz(Point3::new(3.0, 0.0, 0.0), 1.0, CIRCLE_SEGMENTS);
    let rail = elliptical_arc(0.0, 1.5 * PI, 3.0, 2.0, Point3::origin(), 100);
    let guide = elliptical_arc(0.0, 1.5 * PI, 3.0, 2.0, Point3::new(0.0, 0.0, 1.0), 100);

    sweep(&profile, &rail, &guide, config)
}

/// Circle swept along a straight rail while the guide pulls inward.
///
/// With skewed frames the profile shrinks with the guide distance.
///
/// # Errors
///
/// Propagates sweep errors; none occur for the fixed parameters.
pub fn funnel(config: &SweepConfig) -> SweepResult<TriangleMesh> {
    let profile = circle_xz(Point3::origin(), 3.0, CIRCLE_SEGMENTS);
    let rail = line(Point3::origin(), Point3::new(0.0, 6.0, 0.0), 200);
    let guide = concat(
        &line(Point3::new(3.0, 0.0, 0.0), Point3::new(0.5, 3.0, 0.0), 100),
        &line(Point3::new(0.5, 3.0, 0.0), Point3::new(0.25, 6.0, 0.0), 100),
    );

    sweep(&profile, &rail, &guide, config)
}

/// Rectangle swept ten turns up a helix.
///
/// # Errors
///
/// Propagates sweep errors; none occur for the fixed parameters.
pub fn spring(config: &SweepConfig) -> SweepResult<TriangleMesh> {
    let profile = rectangle_xz(Point3::new(2.0, 0.0, 0.0), 0.5, 0.25);
    let turns = 10.0 * 2.0 * PI;
    let rail = helix(0.0, turns, 2.0, 10.0, Point3::origin(), 1000);
    let guide = helix(0.0, turns, 2.0, 10.0, Point3::new(0.0, 0.0, 1.0), 1000);

    sweep(&profile, &rail, &guide, config)
}
