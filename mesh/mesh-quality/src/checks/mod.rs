//! Detection passes.
//!
//! Each pass reads the mesh and its prebuilt [`MeshAdjacency`] and returns the
//! issues it found together with its contribution to [`QualityMetrics`].
//! Passes hold no state between runs, so the same pass can be applied to any
//! number of meshes.
//!
//! [`QualityMetrics`]: crate::QualityMetrics

mod edges;
mod faces;
mod overlap;
mod vertices;

use mesh_types::PolygonMesh;

use crate::adjacency::MeshAdjacency;
use crate::config::QualityConfig;
use crate::issue::MeshIssue;
use crate::metrics::PassStats;

pub use edges::{MAX_MANIFOLD_FACES, NonManifoldEdges, SHARP_ANGLE_THRESHOLD, SharpAngles};
pub use faces::{
    AspectRatios, DEGENERATE_AREA_THRESHOLD, DegenerateFaces, HIGH_ASPECT_THRESHOLD,
    HIGH_STRETCH_THRESHOLD, InvertedNormals, TextureStretch,
};
pub use overlap::{OVERLAP_DISTANCE_THRESHOLD, OverlappingVertices};
pub use vertices::{HIGH_VALENCE_THRESHOLD, LOW_VALENCE_THRESHOLD, VertexValence};

/// A single detection pass.
pub trait QualityCheck {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Inspect the mesh and report what was found.
    ///
    /// Every face index in `mesh` must be in range; the analyzer checks this
    /// with [`MeshAdjacency::try_build`] before running any pass.
    fn run(&self, mesh: &PolygonMesh, topology: &MeshAdjacency) -> CheckOutcome;
}

/// Result of one detection pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckOutcome {
    /// Issues in detection order.
    pub issues: Vec<MeshIssue>,
    /// Metrics contribution, if the pass measures anything.
    pub stats: Option<PassStats>,
}

impl CheckOutcome {
    /// An outcome that only reports issues.
    #[must_use]
    pub const fn issues(issues: Vec<MeshIssue>) -> Self {
        Self {
            issues,
            stats: None,
        }
    }

    /// An outcome with issues and a metrics contribution.
    #[must_use]
    pub const fn with_stats(issues: Vec<MeshIssue>, stats: PassStats) -> Self {
        Self {
            issues,
            stats: Some(stats),
        }
    }
}

/// The full set of passes, in the order their issues appear in a report.
///
/// Order: degenerate faces, aspect ratio, non-manifold edges, vertex valence,
/// overlapping vertices, inverted normals, texture stretch, sharp angles.
#[must_use]
pub fn default_checks(config: &QualityConfig) -> Vec<Box<dyn QualityCheck>> {
    vec![
        Box::new(DegenerateFaces),
        Box::new(AspectRatios),
        Box::new(NonManifoldEdges),
        Box::new(VertexValence),
        Box::new(OverlappingVertices::new(config.overlap_strategy)),
        Box::new(InvertedNormals),
        Box::new(TextureStretch),
        Box::new(SharpAngles),
    ]
}
