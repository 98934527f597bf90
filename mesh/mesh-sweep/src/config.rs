//! Sweep configuration.
//!
//! [`SweepConfig::default()`] reproduces the classic guided extrusion: a
//! skewed frame, the stitching order as emitted, open ends, and parallel
//! ring computation.
//!
//! # Example
//!
//! ```
//! use mesh_sweep::{EndCaps, FrameMode, SweepConfig, Winding};
//!
//! let config = SweepConfig::default()
//!     .with_frame_mode(FrameMode::Orthonormal)
//!     .with_winding(Winding::Consistent)
//!     .with_ends(EndCaps::Closed);
//!
//! assert!(config.parallel);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the per-sample frame is built from rail tangent and guide offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FrameMode {
    /// Columns `(X, Z × X, Z)` with `X` the raw guide offset.
    ///
    /// Not orthogonalized: the guide's distance scales the profile and a
    /// guide offset that is not perpendicular to the tangent shears it.
    #[default]
    Skewed,

    /// Right-handed orthonormal frame steered by the guide.
    ///
    /// The profile keeps its size and shape along the whole rail.
    Orthonormal,
}

/// Triangle vertex order for the side walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Winding {
    /// Emit each quad as `(p[j-1], c[j-1], c[j])`, `(p[j-1], p[j], c[j])`.
    ///
    /// The two triangles of a quad face opposite ways.
    #[default]
    AsStitched,

    /// Emit the first triangle as `(p[j-1], c[j], c[j-1])` so both triangles
    /// of every quad share one orientation.
    Consistent,
}

/// Whether the first and last rings are closed off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EndCaps {
    /// Leave both ends open.
    #[default]
    Open,

    /// Fan-triangulate both end rings around their centroid.
    Closed,
}

/// Configuration for a guided sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepConfig {
    /// Frame construction.
    pub frame_mode: FrameMode,

    /// Side wall triangle orientation.
    pub winding: Winding,

    /// End cap handling.
    pub ends: EndCaps,

    /// Whether to compute rings in parallel (via rayon).
    ///
    /// Output is identical either way.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            frame_mode: FrameMode::default(),
            winding: Winding::default(),
            ends: EndCaps::default(),
            parallel: true,
        }
    }
}

impl SweepConfig {
    /// Configuration for watertight output: orthonormal frames, consistent
    /// winding and closed ends.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_sweep::{EndCaps, SweepConfig};
    ///
    /// assert_eq!(SweepConfig::solid().ends, EndCaps::Closed);
    /// ```
    #[must_use]
    pub fn solid() -> Self {
        Self {
            frame_mode: FrameMode::Orthonormal,
            winding: Winding::Consistent,
            ends: EndCaps::Closed,
            parallel: true,
        }
    }

    /// Set the frame mode.
    #[must_use]
    pub fn with_frame_mode(mut self, frame_mode: FrameMode) -> Self {
        self.frame_mode = frame_mode;
        self
    }

    /// Set the side wall winding.
    #[must_use]
    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }

    /// Set the end cap handling.
    #[must_use]
    pub fn with_ends(mut self, ends: EndCaps) -> Self {
        self.ends = ends;
        self
    }

    /// Close both ends.
    #[must_use]
    pub fn capped(self) -> Self {
        self.with_ends(EndCaps::Closed)
    }

    /// Enable or disable parallel ring computation.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
