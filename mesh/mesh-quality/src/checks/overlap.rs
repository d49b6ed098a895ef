//! Overlapping vertex detection.

use hashbrown::HashMap;
use mesh_types::{Point3, PolygonMesh};

use super::{CheckOutcome, QualityCheck};
use crate::adjacency::MeshAdjacency;
use crate::config::OverlapStrategy;
use crate::issue::{IssueKind, MeshIssue};

/// Distinct vertices closer than this overlap.
pub const OVERLAP_DISTANCE_THRESHOLD: f32 = 1e-4;

const THRESHOLD_SQ: f32 = OVERLAP_DISTANCE_THRESHOLD * OVERLAP_DISTANCE_THRESHOLD;

/// Flags pairs of distinct vertices at (nearly) the same position.
///
/// Each pair `i < j` yields one issue on `i` relating `j`, with severity
/// `1 - distance / 1e-4`. Pairs are reported in ascending `(i, j)` order
/// whichever [`OverlapStrategy`] is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlappingVertices {
    strategy: OverlapStrategy,
}

impl OverlappingVertices {
    /// Create the pass with the given candidate search.
    #[must_use]
    pub const fn new(strategy: OverlapStrategy) -> Self {
        Self { strategy }
    }

    /// The candidate search this pass uses.
    #[must_use]
    pub const fn strategy(&self) -> OverlapStrategy {
        self.strategy
    }
}

impl QualityCheck for OverlappingVertices {
    fn name(&self) -> &'static str {
        "overlapping_vertices"
    }

    fn run(&self, mesh: &PolygonMesh, _topology: &MeshAdjacency) -> CheckOutcome {
        let positions: Vec<Point3<f32>> = mesh.vertices.iter().map(|v| v.position).collect();

        let pairs = match self.strategy {
            OverlapStrategy::BruteForce => overlapping_pairs_brute_force(&positions),
            OverlapStrategy::SpatialHash => overlapping_pairs_spatial_hash(&positions),
        };

        let issues = pairs
            .into_iter()
            .map(|(i, j, dist_sq)| {
                MeshIssue::new(
                    IssueKind::OverlappingVertices,
                    i,
                    1.0 - dist_sq.sqrt() / OVERLAP_DISTANCE_THRESHOLD,
                    vec![j],
                )
            })
            .collect();

        CheckOutcome::issues(issues)
    }
}

/// Squared distance between two positions, shared by both strategies so
/// they agree bit for bit.
#[inline]
fn distance_sq(a: &Point3<f32>, b: &Point3<f32>) -> f32 {
    (b - a).norm_squared()
}

/// Compare every pair.
fn overlapping_pairs_brute_force(positions: &[Point3<f32>]) -> Vec<(usize, usize, f32)> {
    let mut pairs = Vec::new();
    for (i, a) in positions.iter().enumerate() {
        for (j, b) in positions.iter().enumerate().skip(i + 1) {
            let dist_sq = distance_sq(a, b);
            if dist_sq < THRESHOLD_SQ {
                pairs.push((i, j, dist_sq));
            }
        }
    }
    pairs
}

/// Compare only vertices in the same or adjacent grid cells.
///
/// Cells are twice the threshold wide, so any pair closer than the
/// threshold lies within the 3x3x3 block around either vertex.
fn overlapping_pairs_spatial_hash(positions: &[Point3<f32>]) -> Vec<(usize, usize, f32)> {
    if positions.len() < 2 {
        return Vec::new();
    }

    let cell_size = f64::from(OVERLAP_DISTANCE_THRESHOLD) * 2.0;

    let mut spatial_hash: HashMap<(i64, i64, i64), Vec<usize>> = HashMap::new();
    for (idx, pos) in positions.iter().enumerate() {
        spatial_hash
            .entry(pos_to_cell(pos, cell_size))
            .or_default()
            .push(idx);
    }

    let mut pairs = Vec::new();
    let mut matches = Vec::new();

    for (i, pos) in positions.iter().enumerate() {
        let cell = pos_to_cell(pos, cell_size);

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let neighbor_cell = (
                        cell.0.saturating_add(dx),
                        cell.1.saturating_add(dy),
                        cell.2.saturating_add(dz),
                    );

                    let Some(candidates) = spatial_hash.get(&neighbor_cell) else {
                        continue;
                    };
                    for &j in candidates {
                        if j <= i {
                            continue;
                        }
                        let dist_sq = distance_sq(pos, &positions[j]);
                        if dist_sq < THRESHOLD_SQ {
                            matches.push((j, dist_sq));
                        }
                    }
                }
            }
        }

        // Saturated cells can alias, so drop repeats before emitting.
        matches.sort_unstable_by_key(|&(j, _)| j);
        matches.dedup_by_key(|&mut (j, _)| j);
        pairs.extend(matches.drain(..).map(|(j, dist_sq)| (i, j, dist_sq)));
    }

    pairs
}

/// Convert position to spatial hash cell.
#[allow(clippy::cast_possible_truncation)]
fn pos_to_cell(pos: &Point3<f32>, cell_size: f64) -> (i64, i64, i64) {
    (
        (f64::from(pos.x) / cell_size).floor() as i64,
        (f64::from(pos.y) / cell_size).floor() as i64,
        (f64::from(pos.z) / cell_size).floor() as i64,
    )
}
