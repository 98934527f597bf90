//! Guided path extrusion: sweep a profile polygon along a rail path.
//!
//! A sweep takes three inputs:
//!
//! - a **profile** ([`Polygon`](mesh_types::Polygon)), drawn in world space
//!   where the rail starts
//! - a **rail** ([`Path`](path_types::Path)), the path the profile follows
//! - a **guide** (another `Path`, sampled 1:1 with the rail), which sets the
//!   profile's roll and, with skewed frames, its scale
//!
//! and produces an ordered [`TriangleMesh`](mesh_types::TriangleMesh).
//!
//! # Features
//!
//! - **Guided frames**: tangent from the rail, roll from the guide
//! - **Checked and unchecked entry points**: [`sweep`] reports degenerate
//!   input, [`sweep_unchecked`] lets NaN through
//! - **End caps**: optional fans closing both ends
//! - **Parallel rings**: ring placement runs on rayon
//! - **Catalog**: pipe, elliptic torus, funnel and spring models
//!
//! # Quick Start
//!
//! ```
//! use mesh_sweep::{circle_xz, sweep, SweepConfig};
//! use nalgebra::{Point3, Vector3};
//! use path_types::{arc, translate};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let profile = circle_xz(Point3::new(2.0, 0.0, 0.0), 0.5, 24);
//! let rail = arc(0.0, FRAC_PI_2, 2.0, Point3::origin(), 50);
//! let guide = translate(&rail, &Vector3::new(0.0, 0.0, 1.0));
//!
//! let mesh = sweep(&profile, &rail, &guide, &SweepConfig::default().capped()).unwrap();
//! assert_eq!(mesh.len(), 2 * 24 * 49 + 2 * 24);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::suboptimal_flops)]

mod cap;
mod catalog;
mod config;
mod error;
mod frame;
mod profile;
mod sweep;

pub use catalog::{
    CIRCLE_SEGMENTS, CatalogEntry, catalog, ell_torus, find, funnel, pipe, spring,
};
pub use config::{EndCaps, FrameMode, SweepConfig, Winding};
pub use error::{SweepError, SweepResult};
pub use frame::{SweepFrame, guided_frames, try_guided_frames};
pub use profile::{circle_xz, localize_profile, rectangle_xz, try_localize_profile};
pub use sweep::{sweep, sweep_unchecked, triangle_count};
