//! Guided sweep of a profile along a rail.
//!
//! The profile is localized once against the frame at the first rail
//! sample, then re-placed in the frame at every sample to form a ring.
//! Consecutive rings are stitched with two triangles per profile edge.

use mesh_types::{Polygon, Triangle, TriangleMesh};
use nalgebra::{Point3, Vector3};
use path_types::Path;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::cap::{CapEnd, fan};
use crate::config::{EndCaps, SweepConfig, Winding};
use crate::error::{SweepError, SweepResult};
use crate::frame::{SweepFrame, guided_frames, try_guided_frames};
use crate::profile::{localize_profile, try_localize_profile};

/// Sweep `profile` along `rail`, rolled by `guide`, without validation.
///
/// Degenerate input is not rejected: a zero rail tangent or a guide sample
/// sitting on the rail produces non-finite coordinates in the affected
/// triangles. An empty profile, rail or guide yields an empty mesh. If the
/// paths differ in length, the extra samples of the longer one are ignored.
///
/// # Example
///
/// ```
/// use mesh_sweep::{circle_xz, sweep_unchecked, SweepConfig};
/// use nalgebra::{Point3, Vector3};
/// use path_types::{line, translate};
///
/// let profile = circle_xz(Point3::origin(), 1.0, 16);
/// let rail = line(Point3::origin(), Point3::new(0.0, 5.0, 0.0), 10);
/// let guide = translate(&rail, &Vector3::new(1.0, 0.0, 0.0));
///
/// let mesh = sweep_unchecked(&profile, &rail, &guide, &SweepConfig::default());
/// assert_eq!(mesh.len(), 2 * 16 * 9);
/// ```
#[must_use]
pub fn sweep_unchecked(
    profile: &Polygon,
    rail: &Path,
    guide: &Path,
    config: &SweepConfig,
) -> TriangleMesh {
    let (Some(rail_start), Some(guide_start)) = (rail.first(), guide.first()) else {
        return TriangleMesh::new();
    };
    if profile.is_empty() {
        return TriangleMesh::new();
    }

    log_start(profile, rail.len().min(guide.len()), config);

    let reference = SweepFrame::from_samples(rail_start, guide_start, config.frame_mode);
    let local = localize_profile(profile, &reference);
    let frames = guided_frames(rail, guide, config.frame_mode);

    let mesh = assemble(profile, &local, &frames, config);
    debug!(triangles = mesh.len(), "Sweep complete");
    mesh
}

/// Sweep `profile` along `rail`, rolled by `guide`, rejecting degenerate
/// input.
///
/// # Errors
///
/// - [`SweepError::TooFewProfilePoints`] for a profile with fewer than 3 points
/// - [`SweepError::EmptyPath`] if the rail or guide is empty
/// - [`SweepError::PathLengthMismatch`] if rail and guide differ in length
/// - [`SweepError::NonFinite`] for a rail or guide sample with NaN or infinity
/// - [`SweepError::NonFiniteProfilePoint`] for a profile point with NaN or
///   infinity
/// - [`SweepError::DegenerateTangent`] for a zero-length rail tangent
/// - [`SweepError::SingularFrame`] where the guide offset is zero or parallel
///   to the rail tangent
///
/// # Example
///
/// ```
/// use mesh_sweep::{rectangle_xz, sweep, SweepConfig, SweepError};
/// use nalgebra::Point3;
/// use path_types::line;
///
/// let profile = rectangle_xz(Point3::origin(), 1.0, 1.0);
/// let rail = line(Point3::origin(), Point3::new(0.0, 5.0, 0.0), 10);
/// let guide = line(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 5.0, 0.0), 5);
///
/// let err = sweep(&profile, &rail, &guide, &SweepConfig::default());
/// assert_eq!(err, Err(SweepError::PathLengthMismatch { rail: 10, guide: 5 }));
/// ```
pub fn sweep(
    profile: &Polygon,
    rail: &Path,
    guide: &Path,
    config: &SweepConfig,
) -> SweepResult<TriangleMesh> {
    let result = sweep_checked(profile, rail, guide, config);
    if let Err(err) = &result {
        warn!(error = %err, index = ?err.sample_index(), "Sweep rejected input");
    }
    result
}

fn sweep_checked(
    profile: &Polygon,
    rail: &Path,
    guide: &Path,
    config: &SweepConfig,
) -> SweepResult<TriangleMesh> {
    if profile.distinct_len() < 3 {
        return Err(SweepError::TooFewProfilePoints {
            min: 3,
            actual: profile.distinct_len(),
        });
    }
    if rail.is_empty() || guide.is_empty() {
        return Err(SweepError::EmptyPath);
    }
    if rail.len() != guide.len() {
        return Err(SweepError::PathLengthMismatch {
            rail: rail.len(),
            guide: guide.len(),
        });
    }
    for path in [rail, guide] {
        if let Some(index) = path.iter().position(|s| !s.is_finite()) {
            return Err(SweepError::NonFinite { index });
        }
    }

    log_start(profile, rail.len(), config);

    let frames = try_guided_frames(rail, guide, config.frame_mode)?;
    let reference = frames.first().ok_or(SweepError::EmptyPath)?;
    let local = try_localize_profile(profile, reference)?;

    let mesh = assemble(profile, &local, &frames, config);
    debug!(triangles = mesh.len(), "Sweep complete");
    Ok(mesh)
}

fn log_start(profile: &Polygon, samples: usize, config: &SweepConfig) {
    debug!(
        profile_points = profile.len(),
        samples,
        frame_mode = ?config.frame_mode,
        winding = ?config.winding,
        ends = ?config.ends,
        parallel = config.parallel,
        "Starting sweep"
    );
}

/// Number of triangles a sweep emits for the given sizes.
///
/// `2 * k * (n - 1)` side triangles for `k` profile points over `n` samples,
/// plus one fan triangle per distinct profile point at each closed end.
///
/// # Example
///
/// ```
/// use mesh_sweep::{triangle_count, EndCaps};
///
/// assert_eq!(triangle_count(100, 100, 200, EndCaps::Open), 39_800);
/// assert_eq!(triangle_count(5, 4, 1000, EndCaps::Closed), 9_998);
/// ```
#[must_use]
pub fn triangle_count(points: usize, distinct: usize, samples: usize, ends: EndCaps) -> usize {
    let sides = 2 * points * samples.saturating_sub(1);
    match ends {
        EndCaps::Closed if samples > 0 && distinct >= 3 => sides + 2 * distinct,
        _ => sides,
    }
}

fn assemble(
    profile: &Polygon,
    local: &[Vector3<f64>],
    frames: &[SweepFrame],
    config: &SweepConfig,
) -> TriangleMesh {
    let rings = build_rings(local, frames, config.parallel);

    let distinct = profile.distinct_len();
    let mut mesh = TriangleMesh::with_capacity(triangle_count(
        local.len(),
        distinct,
        rings.len(),
        config.ends,
    ));

    let closed = config.ends == EndCaps::Closed;
    if let Some(first) = rings.first().filter(|_| closed) {
        mesh.extend(fan(first, distinct, CapEnd::Start));
    }

    for pair in rings.windows(2) {
        stitch(&pair[0], &pair[1], config.winding, &mut mesh);
    }

    if let Some(last) = rings.last().filter(|_| closed) {
        mesh.extend(fan(last, distinct, CapEnd::End));
    }

    mesh
}

/// Place the localized profile in every frame.
fn build_rings(
    local: &[Vector3<f64>],
    frames: &[SweepFrame],
    parallel: bool,
) -> Vec<Vec<Point3<f64>>> {
    let ring = |frame: &SweepFrame| -> Vec<Point3<f64>> {
        local.iter().map(|l| frame.place(l)).collect()
    };
    if parallel {
        frames.par_iter().map(ring).collect()
    } else {
        frames.iter().map(ring).collect()
    }
}

/// Join two consecutive rings with two triangles per profile edge.
///
/// The edge ending at index `j` starts at `j - 1`, and the edge ending at
/// index 0 starts at the last ring point, closing the loop.
fn stitch(prev: &[Point3<f64>], curr: &[Point3<f64>], winding: Winding, mesh: &mut TriangleMesh) {
    let (Some(&prev_last), Some(&curr_last)) = (prev.last(), curr.last()) else {
        return;
    };

    let mut p0 = prev_last;
    let mut c0 = curr_last;
    for (&p1, &c1) in prev.iter().zip(curr) {
        let first = match winding {
            Winding::AsStitched => Triangle::new(p0, c0, c1),
            Winding::Consistent => Triangle::new(p0, c1, c0),
        };
        mesh.push(first);
        mesh.push(Triangle::new(p0, p1, c1));

        p0 = p1;
        c0 = c1;
    }
}
