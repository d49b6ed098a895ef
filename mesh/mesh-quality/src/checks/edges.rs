//! Per-edge passes: non-manifold edges and sharp angles.

use mesh_types::PolygonMesh;

use super::{CheckOutcome, QualityCheck};
use crate::adjacency::MeshAdjacency;
use crate::geometry;
use crate::issue::{IssueKind, MeshIssue};
use crate::metrics::{DihedralRange, PassStats};

/// An edge with more incident faces is non-manifold.
pub const MAX_MANIFOLD_FACES: usize = 2;

/// Manifold edges whose dihedral angle is smaller are sharp, in degrees.
pub const SHARP_ANGLE_THRESHOLD: f32 = 30.0;

/// Flags edges shared by more than two faces.
///
/// Severity is `min(1, (faces - 2) / 4)`, so an edge shared by three faces
/// scores 0.25 and one shared by six or more scores 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonManifoldEdges;

impl QualityCheck for NonManifoldEdges {
    fn name(&self) -> &'static str {
        "non_manifold_edges"
    }

    #[allow(clippy::cast_precision_loss)]
    fn run(&self, _mesh: &PolygonMesh, topology: &MeshAdjacency) -> CheckOutcome {
        let issues: Vec<_> = topology
            .edges()
            .filter(|(_, faces)| faces.len() > MAX_MANIFOLD_FACES)
            .map(|(edge, faces)| {
                let excess = (faces.len() - MAX_MANIFOLD_FACES) as f32;
                MeshIssue::for_edge(IssueKind::NonManifoldEdge, edge, (excess / 4.0).min(1.0))
            })
            .collect();

        let count = issues.len();
        CheckOutcome::with_stats(issues, PassStats::NonManifoldEdges(count))
    }
}

/// Flags manifold edges with a small dihedral angle and tracks the angle range.
///
/// Only edges with exactly two incident faces are measured, see
/// [`geometry::dihedral_angle`] for what the angle means. Severity is
/// `1 - angle / 30`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharpAngles;

impl QualityCheck for SharpAngles {
    fn name(&self) -> &'static str {
        "sharp_angles"
    }

    fn run(&self, mesh: &PolygonMesh, topology: &MeshAdjacency) -> CheckOutcome {
        let mut range = DihedralRange::new();
        let mut issues = Vec::new();

        for (edge, faces) in topology.edges() {
            let &[f1, f2] = faces else {
                continue;
            };

            let angle = geometry::dihedral_angle(mesh, f1, f2, edge.0, edge.1);
            range.observe(angle);

            if angle < SHARP_ANGLE_THRESHOLD {
                issues.push(MeshIssue::for_edge(
                    IssueKind::SharpAngle,
                    edge,
                    1.0 - angle / SHARP_ANGLE_THRESHOLD,
                ));
            }
        }

        CheckOutcome::with_stats(issues, PassStats::Dihedral(range))
    }
}
