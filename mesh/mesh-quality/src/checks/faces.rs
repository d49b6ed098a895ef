//! Per-face passes: degenerate area, aspect ratio, winding, texture stretch.

use mesh_types::{MeshTopology, PolygonMesh, Vector3};

use super::{CheckOutcome, QualityCheck};
use crate::adjacency::MeshAdjacency;
use crate::geometry::{self, EPSILON};
use crate::issue::{IssueKind, MeshIssue};
use crate::metrics::{PassStats, RunningRange};

/// Faces whose leading triangle has a smaller area are degenerate.
pub const DEGENERATE_AREA_THRESHOLD: f32 = 1e-5;

/// Faces with a larger aspect ratio are needles or slivers.
pub const HIGH_ASPECT_THRESHOLD: f32 = 10.0;

/// Faces with a larger UV stretch are badly parameterized.
pub const HIGH_STRETCH_THRESHOLD: f32 = 4.0;

/// Flags faces with (near) zero area and measures face areas.
///
/// Severity is `1 - area / threshold`. The average area is taken over every
/// face in the mesh, including faces too short to measure.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegenerateFaces;

impl QualityCheck for DegenerateFaces {
    fn name(&self) -> &'static str {
        "degenerate_faces"
    }

    fn run(&self, mesh: &PolygonMesh, _topology: &MeshAdjacency) -> CheckOutcome {
        let mut areas = RunningRange::new();
        let mut issues = Vec::new();

        for (face_idx, face) in mesh.faces.iter().enumerate() {
            let Some(triangle) = mesh.triangle(face_idx) else {
                continue;
            };

            let area = triangle.area();
            areas.observe(area);

            if area < DEGENERATE_AREA_THRESHOLD {
                issues.push(MeshIssue::for_face(
                    IssueKind::DegenerateFace,
                    face_idx,
                    1.0 - area / DEGENERATE_AREA_THRESHOLD,
                    &face.vertices,
                ));
            }
        }

        let degenerate_count = issues.len();
        CheckOutcome::with_stats(
            issues,
            PassStats::FaceArea {
                range: areas.finish(mesh.face_count()),
                degenerate_count,
            },
        )
    }
}

/// Flags needle and sliver faces and measures aspect ratios.
///
/// Severity is `min(1, (ratio - 10) / 30)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AspectRatios;

impl QualityCheck for AspectRatios {
    fn name(&self) -> &'static str {
        "aspect_ratio"
    }

    fn run(&self, mesh: &PolygonMesh, _topology: &MeshAdjacency) -> CheckOutcome {
        let mut ratios = RunningRange::new();
        let mut issues = Vec::new();

        for (face_idx, face) in mesh.faces.iter().enumerate() {
            let Some(corners) = face.leading_triangle() else {
                continue;
            };

            let ratio = geometry::aspect_ratio(mesh, corners);
            ratios.observe(ratio);

            if ratio > HIGH_ASPECT_THRESHOLD {
                issues.push(MeshIssue::for_face(
                    IssueKind::HighAspectRatio,
                    face_idx,
                    ((ratio - HIGH_ASPECT_THRESHOLD) / 30.0).min(1.0),
                    &face.vertices,
                ));
            }
        }

        CheckOutcome {
            issues,
            stats: ratios.finish(mesh.face_count()).map(PassStats::AspectRatio),
        }
    }
}

/// Flags faces whose winding disagrees with their vertex normals.
///
/// The geometric normal of the leading triangle is compared with the mean of
/// its three vertex normals. Faces where either vector is too short to
/// normalize are skipped. Severity is `min(1, -dot)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvertedNormals;

impl QualityCheck for InvertedNormals {
    fn name(&self) -> &'static str {
        "inverted_normals"
    }

    fn run(&self, mesh: &PolygonMesh, _topology: &MeshAdjacency) -> CheckOutcome {
        let mut issues = Vec::new();

        for (face_idx, face) in mesh.faces.iter().enumerate() {
            let Some(corners) = face.leading_triangle() else {
                continue;
            };
            let Some(geometric) = geometry::face_normal(mesh, corners) else {
                continue;
            };

            let shading = corners
                .iter()
                .filter_map(|&v| mesh.vertex(v as usize))
                .map(|v| v.normal)
                .sum::<Vector3<f32>>()
                / 3.0;
            let len = shading.norm();
            if len <= EPSILON {
                continue;
            }

            let dot = geometric.dot(&(shading / len));
            if dot < 0.0 {
                issues.push(MeshIssue::for_face(
                    IssueKind::InvertedNormal,
                    face_idx,
                    (-dot).min(1.0),
                    &face.vertices,
                ));
            }
        }

        CheckOutcome::issues(issues)
    }
}

/// Flags faces with strong texture distortion and measures average stretch.
///
/// Only faces with a measurable stretch (see [`geometry::uv_stretch`])
/// contribute to the average. Severity is `min(1, (stretch - 4) / 6)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextureStretch;

impl QualityCheck for TextureStretch {
    fn name(&self) -> &'static str {
        "texture_stretch"
    }

    #[allow(clippy::cast_precision_loss)]
    fn run(&self, mesh: &PolygonMesh, _topology: &MeshAdjacency) -> CheckOutcome {
        let mut issues = Vec::new();
        let mut total = 0.0_f32;
        let mut measured = 0_usize;

        for (face_idx, face) in mesh.faces.iter().enumerate() {
            let stretch = geometry::uv_stretch(mesh, face);
            if stretch <= 0.0 {
                continue;
            }

            total += stretch;
            measured += 1;

            if stretch > HIGH_STRETCH_THRESHOLD {
                issues.push(MeshIssue::for_face(
                    IssueKind::TextureStretch,
                    face_idx,
                    ((stretch - HIGH_STRETCH_THRESHOLD) / 6.0).min(1.0),
                    &face.vertices,
                ));
            }
        }

        CheckOutcome {
            issues,
            stats: (measured > 0).then(|| PassStats::UvStretch(total / measured as f32)),
        }
    }
}
