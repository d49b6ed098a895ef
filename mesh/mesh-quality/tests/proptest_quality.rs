//! Property-based tests for mesh quality analysis.
//!
//! These tests use proptest to generate random polygon meshes and verify
//! invariants of the analysis.
//!
//! Run with: cargo test -p mesh-quality -- proptest

#![allow(clippy::unwrap_used)]

use mesh_quality::{
    ElementKind, IssueKind, OverlapStrategy, QualityConfig, QualityError, analyze_mesh,
};
use mesh_types::{Face, PolygonMesh, Vertex};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating random meshes
// =============================================================================

/// Generate a coordinate, snapped to a coarse grid half of the time so that
/// coincident vertices and collinear corners actually occur.
fn arb_coord() -> impl Strategy<Value = f32> {
    prop_oneof![
        -10.0..10.0f32,
        (-4i8..=4).prop_map(|i| f32::from(i) * 0.5),
    ]
}

/// Generate a random vertex with position, normal and texture coordinate.
fn arb_vertex() -> impl Strategy<Value = Vertex> {
    (
        prop::array::uniform3(arb_coord()),
        prop::array::uniform3(-1.0..1.0f32),
        prop::array::uniform2(0.0..1.0f32),
    )
        .prop_map(|([x, y, z], [nx, ny, nz], [u, v])| {
            Vertex::from_coords(x, y, z)
                .normal_along(nx, ny, nz)
                .uv_at(u, v)
        })
}

/// Generate a mesh whose face indices are all valid. Faces have one to five
/// corners, so short faces and polygons both appear.
fn arb_mesh(max_vertices: usize, max_faces: usize) -> impl Strategy<Value = PolygonMesh> {
    (1..=max_vertices).prop_flat_map(move |num_vertices| {
        prop::collection::vec(arb_vertex(), num_vertices).prop_flat_map(move |verts| {
            let n = u32::try_from(verts.len()).unwrap();
            let face = prop::collection::vec(0..n, 1..=5).prop_map(Face::new);
            prop::collection::vec(face, 0..=max_faces)
                .prop_map(move |faces| PolygonMesh::from_parts("random", verts.clone(), faces))
        })
    })
}

// =============================================================================
// Property Tests: Analysis
// =============================================================================

proptest! {
    /// Analyzing the same mesh twice produces the same report.
    #[test]
    fn analysis_is_deterministic(mesh in arb_mesh(30, 40)) {
        let config = QualityConfig::default();
        let first = analyze_mesh(&mesh, &config).unwrap();
        let second = analyze_mesh(&mesh, &config).unwrap();

        prop_assert_eq!(first, second);
    }

    /// Every severity is a finite value in [0, 1].
    #[test]
    fn severities_are_normalized(mesh in arb_mesh(30, 40)) {
        let report = analyze_mesh(&mesh, &QualityConfig::default()).unwrap();

        for issue in report.issues() {
            prop_assert!(
                (0.0..=1.0).contains(&issue.severity),
                "{} has severity {}", issue.kind, issue.severity
            );
        }
    }

    /// Issues point at elements that exist.
    #[test]
    fn issue_elements_are_in_range(mesh in arb_mesh(30, 40)) {
        let report = analyze_mesh(&mesh, &QualityConfig::default()).unwrap();

        for issue in report.issues() {
            let limit = match issue.kind.element_kind() {
                ElementKind::Face => mesh.faces.len(),
                ElementKind::Vertex | ElementKind::Edge => mesh.vertices.len(),
            };
            prop_assert!(issue.element < limit, "{issue}");
            prop_assert!(issue.related.iter().all(|&r| r < mesh.vertices.len()));
        }
    }

    /// Kind and severity filters select exactly the matching issues, in order.
    #[test]
    fn filters_are_exact_subsets(mesh in arb_mesh(20, 30), cutoff in 0.0..=1.0f32) {
        let report = analyze_mesh(&mesh, &QualityConfig::default()).unwrap();

        for kind in IssueKind::ALL {
            let expected: Vec<_> = report.issues().iter().filter(|i| i.kind == kind).collect();
            prop_assert_eq!(report.issues_by_kind(kind), expected);
        }

        let expected: Vec<_> = report
            .issues()
            .iter()
            .filter(|i| i.severity >= cutoff)
            .collect();
        prop_assert_eq!(report.issues_by_severity(cutoff), expected);
    }

    /// Per-kind counts add up to the total issue count.
    #[test]
    fn counts_cover_every_issue(mesh in arb_mesh(20, 30)) {
        let report = analyze_mesh(&mesh, &QualityConfig::default()).unwrap();
        let total: usize = report.issue_counts().values().sum();

        prop_assert_eq!(total, report.issues().len());
        prop_assert_eq!(
            report.metrics().degenerate_face_count,
            report.issues_by_kind(IssueKind::DegenerateFace).len()
        );
    }

    /// Face metrics are ordered whenever any face was measured.
    #[test]
    fn face_metrics_are_ordered(mesh in arb_mesh(20, 30)) {
        let report = analyze_mesh(&mesh, &QualityConfig::default()).unwrap();
        let m = report.metrics();

        if m.has_face_data() {
            prop_assert!(m.min_face_area <= m.max_face_area);
            prop_assert!(m.min_aspect_ratio <= m.max_aspect_ratio);
        }
    }
}

// =============================================================================
// Property Tests: Configuration
// =============================================================================

proptest! {
    /// Both overlap strategies find exactly the same issues.
    #[test]
    fn overlap_strategies_agree(mesh in arb_mesh(40, 10)) {
        let brute = analyze_mesh(
            &mesh,
            &QualityConfig::default().with_overlap_strategy(OverlapStrategy::BruteForce),
        )
        .unwrap();
        let hashed = analyze_mesh(
            &mesh,
            &QualityConfig::default().with_overlap_strategy(OverlapStrategy::SpatialHash),
        )
        .unwrap();

        prop_assert_eq!(brute, hashed);
    }

    /// A severity cutoff is the same as filtering afterwards, and never
    /// changes metrics.
    #[test]
    fn cutoff_matches_post_filter(mesh in arb_mesh(20, 30), cutoff in 0.0..=1.0f32) {
        let all = analyze_mesh(&mesh, &QualityConfig::default()).unwrap();
        let cut = analyze_mesh(&mesh, &QualityConfig::default().with_min_severity(cutoff)).unwrap();

        let expected: Vec<_> = all.issues_by_severity(cutoff).into_iter().cloned().collect();
        prop_assert_eq!(cut.issues(), expected.as_slice());
        prop_assert_eq!(cut.metrics(), all.metrics());
    }

    /// A face pointing past the vertex list is always rejected.
    #[test]
    fn out_of_range_index_is_an_error(mut mesh in arb_mesh(10, 10), past in 0u32..5) {
        let n = u32::try_from(mesh.vertices.len()).unwrap();
        mesh.faces.push(Face::triangle(0, n + past, 0));
        let face = mesh.faces.len() - 1;

        let result = analyze_mesh(&mesh, &QualityConfig::default());
        let is_invalid_index = matches!(
            result,
            Err(QualityError::InvalidIndex { face: f, .. }) if f <= face
        );
        prop_assert!(is_invalid_index);
    }
}
