//! End-to-end sweep scenarios and properties.
//!
//! Run with: cargo test -p mesh-sweep

#![allow(clippy::expect_used)]

use approx::{assert_relative_eq, relative_eq};
use mesh_sweep::{
    EndCaps, FrameMode, SweepConfig, SweepError, Winding, catalog, circle_xz, find,
    rectangle_xz, sweep, sweep_unchecked, triangle_count,
};
use mesh_types::{MeshBounds, Point3, Polygon, Vector3};
use path_types::{Path, PathSample, line, translate};
use proptest::prelude::*;

fn straight_rail(n: usize) -> (Path, Path) {
    let rail = line(Point3::origin(), Point3::new(0.0, 0.0, 10.0), n);
    let guide = translate(&rail, &Vector3::new(1.0, 0.0, 0.0));
    (rail, guide)
}

fn square_xy() -> Polygon {
    Polygon::new(vec![
        Point3::new(-0.5, -0.5, 0.0),
        Point3::new(0.5, -0.5, 0.0),
        Point3::new(0.5, 0.5, 0.0),
        Point3::new(-0.5, 0.5, 0.0),
    ])
}

// =============================================================================
// Prism
// =============================================================================

#[test]
fn straight_rail_builds_congruent_parallel_rings() {
    let (rail, guide) = straight_rail(11);
    let profile = square_xy();
    let mesh = sweep(&profile, &rail, &guide, &SweepConfig::default()).expect("valid sweep");

    assert_eq!(mesh.len(), 2 * 4 * 10);

    // Every ring is the profile shifted along the rail
    for (i, quad) in mesh.triangles().chunks(2 * 4).enumerate() {
        let z_prev = i as f64;
        let z_curr = (i + 1) as f64;
        for (j, pair) in quad.chunks(2).enumerate() {
            let t2 = pair[1];
            assert_relative_eq!(t2.v1, profile[j] + Vector3::new(0.0, 0.0, z_prev), epsilon = 1e-9);
            assert_relative_eq!(t2.v2, profile[j] + Vector3::new(0.0, 0.0, z_curr), epsilon = 1e-9);
        }
    }

    let bounds = mesh.bounds();
    assert_relative_eq!(bounds.min, Point3::new(-0.5, -0.5, 0.0), epsilon = 1e-9);
    assert_relative_eq!(bounds.max, Point3::new(0.5, 0.5, 10.0), epsilon = 1e-9);
}

#[test]
fn prism_side_area_is_perimeter_times_length() {
    let (rail, guide) = straight_rail(6);
    let mesh = sweep(&square_xy(), &rail, &guide, &SweepConfig::default()).expect("valid sweep");
    assert_relative_eq!(mesh.surface_area(), 4.0 * 10.0, epsilon = 1e-9);
}

#[test]
fn capped_prism_is_closed_and_consistent() {
    let (rail, guide) = straight_rail(3);
    let config = SweepConfig::default()
        .with_winding(Winding::Consistent)
        .with_ends(EndCaps::Closed);
    let mesh = sweep(&square_xy(), &rail, &guide, &config).expect("valid sweep");

    assert_eq!(mesh.len(), 2 * 4 * 2 + 2 * 4);
    assert_relative_eq!(mesh.surface_area(), 4.0 * 10.0 + 2.0, epsilon = 1e-9);

    // Divergence theorem: a closed, consistently wound surface encloses
    // a volume of |sum(v0 . n) / 6| regardless of orientation.
    let signed: f64 = mesh
        .iter()
        .map(|t| t.v0.coords.dot(&t.normal_unnormalized()))
        .sum::<f64>()
        / 6.0;
    assert_relative_eq!(signed.abs(), 10.0, epsilon = 1e-9);
}

// =============================================================================
// Degenerate input
// =============================================================================

#[test]
fn zero_tangent_propagates_nan_unchecked_and_errors_checked() {
    let (rail, guide) = straight_rail(5);
    let mut samples = rail.into_samples();
    samples[2].tangent = Vector3::zeros();
    let rail = Path::from_samples(samples);

    let mesh = sweep_unchecked(&square_xy(), &rail, &guide, &SweepConfig::default());
    assert_eq!(mesh.len(), 2 * 4 * 4);
    assert!(!mesh.is_finite());

    assert_eq!(
        sweep(&square_xy(), &rail, &guide, &SweepConfig::default()),
        Err(SweepError::DegenerateTangent { index: 2 })
    );
}

#[test]
fn guide_on_rail_is_singular() {
    let (rail, _) = straight_rail(5);
    let err = sweep(&square_xy(), &rail, &rail, &SweepConfig::default());
    assert!(matches!(err, Err(SweepError::SingularFrame { index: 0, .. })));

    let mesh = sweep_unchecked(&square_xy(), &rail, &rail, &SweepConfig::default());
    assert!(!mesh.is_finite());
}

#[test]
fn mismatched_lengths() {
    let (rail, _) = straight_rail(8);
    let (_, guide) = straight_rail(5);

    assert_eq!(
        sweep(&square_xy(), &rail, &guide, &SweepConfig::default()),
        Err(SweepError::PathLengthMismatch { rail: 8, guide: 5 })
    );

    // Unchecked consumes the common prefix
    let mesh = sweep_unchecked(&square_xy(), &rail, &guide, &SweepConfig::default());
    assert_eq!(mesh.len(), 2 * 4 * 4);
}

#[test]
fn single_sample_path_has_no_side_triangles() {
    let rail = Path::from_samples(vec![PathSample::new(Point3::origin(), Vector3::z())]);
    let guide = translate(&rail, &Vector3::x());
    let mesh = sweep(&square_xy(), &rail, &guide, &SweepConfig::default()).expect("valid sweep");
    assert!(mesh.is_empty());
}

// =============================================================================
// Frame modes
// =============================================================================

#[test]
fn skewed_frame_scales_profile_with_guide_distance() {
    let rail = line(Point3::origin(), Point3::new(0.0, 0.0, 4.0), 2);
    let guide = line(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 0.0, 4.0), 2);
    let profile = square_xy();

    let skewed = sweep(&profile, &rail, &guide, &SweepConfig::default()).expect("valid sweep");
    let top = skewed.bounds();
    assert_relative_eq!(top.max.x, 1.0, epsilon = 1e-9);

    let config = SweepConfig::default().with_frame_mode(FrameMode::Orthonormal);
    let upright = sweep(&profile, &rail, &guide, &config).expect("valid sweep");
    assert_relative_eq!(upright.bounds().max.x, 0.5, epsilon = 1e-9);
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn catalog_triangle_counts() {
    let config = SweepConfig::default();
    let expected = [
        ("pipe", triangle_count(100, 100, 200, EndCaps::Open)),
        ("ell_torus", triangle_count(100, 100, 100, EndCaps::Open)),
        ("funnel", triangle_count(100, 100, 200, EndCaps::Open)),
        ("spring", triangle_count(5, 4, 1000, EndCaps::Open)),
    ];

    for (name, count) in expected {
        let entry = find(name).expect("catalog entry");
        let mesh = entry.build(&config).expect("catalog models are valid");
        assert_eq!(mesh.len(), count, "{name}");
        assert!(mesh.is_finite(), "{name}");
    }
    assert_eq!(catalog().len(), 4);
}

#[test]
fn capped_spring_adds_two_fans() {
    let config = SweepConfig::default().capped();
    let mesh = find("spring")
        .expect("catalog entry")
        .build(&config)
        .expect("valid sweep");
    assert_eq!(mesh.len(), 9990 + 2 * 4);
}

#[test]
fn funnel_narrows_toward_the_top() {
    let mesh = find("funnel")
        .expect("catalog entry")
        .build(&SweepConfig::default())
        .expect("valid sweep");
    let bounds = mesh.bounds();
    assert_relative_eq!(bounds.max.x, 3.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.max.y, 6.0, epsilon = 1e-9);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn side_count_is_2kn(k in 3usize..40, n in 1usize..40) {
        let profile = circle_xz(Point3::origin(), 1.0, k);
        let rail = line(Point3::origin(), Point3::new(0.0, 3.0, 0.0), n.max(2));
        let guide = translate(&rail, &Vector3::new(2.0, 0.0, 0.0));
        let mesh = sweep(&profile, &rail, &guide, &SweepConfig::default());
        prop_assert!(mesh.is_ok());
        if let Ok(mesh) = mesh {
            prop_assert_eq!(mesh.len(), 2 * k * (rail.len() - 1));
        }
    }

    #[test]
    fn translated_inputs_translate_output(
        offset in prop::array::uniform3(-20.0..20.0f64),
    ) {
        let offset = Vector3::from(offset);
        let profile = rectangle_xz(Point3::new(2.0, 0.0, 0.0), 0.5, 0.25);
        let rail = path_types::helix(0.0, 6.0, 2.0, 3.0, Point3::origin(), 20);
        let guide = translate(&rail, &Vector3::new(0.0, 0.0, 1.0));

        let moved_profile: Polygon = profile.iter().map(|p| p + offset).collect();
        let base = sweep_unchecked(&profile, &rail, &guide, &SweepConfig::default());
        let moved = sweep_unchecked(
            &moved_profile,
            &translate(&rail, &offset),
            &translate(&guide, &offset),
            &SweepConfig::default(),
        );

        prop_assert_eq!(base.len(), moved.len());
        for (a, b) in base.iter().zip(&moved) {
            prop_assert!(relative_eq!(a.v0 + offset, b.v0, epsilon = 1e-9));
            prop_assert!(relative_eq!(a.v2 + offset, b.v2, epsilon = 1e-9));
        }
    }
}
