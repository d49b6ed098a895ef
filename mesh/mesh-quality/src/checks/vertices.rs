//! Vertex valence pass.

use mesh_types::PolygonMesh;

use super::{CheckOutcome, QualityCheck};
use crate::adjacency::MeshAdjacency;
use crate::issue::{IssueKind, MeshIssue};

/// Connected vertices with fewer neighbours have low valence.
pub const LOW_VALENCE_THRESHOLD: usize = 3;

/// Vertices with more neighbours have high valence.
pub const HIGH_VALENCE_THRESHOLD: usize = 12;

/// Flags vertices with too few or too many neighbours.
///
/// Isolated vertices (valence 0) are never flagged. Low valence scores
/// `1 - valence / 3`, high valence scores `min(1, (valence - 12) / 8)`.
/// Each issue relates the vertex's neighbours in adjacency order.
#[derive(Debug, Clone, Copy, Default)]
pub struct VertexValence;

impl QualityCheck for VertexValence {
    fn name(&self) -> &'static str {
        "vertex_valence"
    }

    #[allow(clippy::cast_precision_loss)]
    fn run(&self, _mesh: &PolygonMesh, topology: &MeshAdjacency) -> CheckOutcome {
        let mut issues = Vec::new();

        for (vertex, neighbors) in topology.vertex_neighbors() {
            let valence = neighbors.len();

            if valence > 0 && valence < LOW_VALENCE_THRESHOLD {
                let severity = 1.0 - valence as f32 / LOW_VALENCE_THRESHOLD as f32;
                issues.push(MeshIssue::for_vertex(
                    IssueKind::LowValenceVertex,
                    vertex,
                    severity,
                    neighbors,
                ));
            }

            if valence > HIGH_VALENCE_THRESHOLD {
                let severity = ((valence - HIGH_VALENCE_THRESHOLD) as f32 / 8.0).min(1.0);
                issues.push(MeshIssue::for_vertex(
                    IssueKind::HighValenceVertex,
                    vertex,
                    severity,
                    neighbors,
                ));
            }
        }

        CheckOutcome::issues(issues)
    }
}
