//! Regression fixtures for mesh quality analysis.
//!
//! Small hand-built meshes with known answers.

#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

use approx::assert_relative_eq;
use mesh_quality::{
    IssueKind, OverlapStrategy, QualityAnalyzer, QualityConfig, QualityError, QualityMetrics,
    UNSET_MIN, analyze_mesh,
};
use mesh_types::{Face, PolygonMesh, Vertex, unit_cube};

fn mesh_of(name: &str, points: &[[f32; 3]], faces: Vec<Face>) -> PolygonMesh {
    PolygonMesh::from_parts(
        name,
        points.iter().map(|&p| Vertex::from(p)).collect(),
        faces,
    )
}

/// Right triangle in the XY plane with UVs equal to its XY coordinates.
fn textured_triangle() -> PolygonMesh {
    let mut mesh = mesh_of(
        "tri",
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        vec![Face::triangle(0, 1, 2)],
    );
    for v in &mut mesh.vertices {
        *v = v.uv_at(v.position.x, v.position.y);
    }
    mesh
}

fn analyze(mesh: &PolygonMesh) -> mesh_quality::QualityReport {
    analyze_mesh(mesh, &QualityConfig::default()).unwrap()
}

#[test]
fn zero_faces_keep_sentinel_metrics() {
    let mesh = mesh_of("points", &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]], Vec::new());
    let report = analyze(&mesh);

    assert!(report.issues().is_empty());
    let m = report.metrics();
    assert_eq!(m.min_face_area, UNSET_MIN);
    assert_eq!(m.max_face_area, 0.0);
    assert_eq!(m.avg_face_area, 0.0);
    assert_eq!(m.min_aspect_ratio, UNSET_MIN);
    assert_eq!(m.avg_aspect_ratio, 0.0);
    assert_eq!(m.min_dihedral_angle, UNSET_MIN);
    assert_eq!(m.max_dihedral_angle, 0.0);
    assert_eq!(m.uv_stretch_factor, 0.0);
    assert_eq!(m.degenerate_face_count, 0);
    assert_eq!(m.non_manifold_edge_count, 0);
}

#[test]
fn clean_triangle_has_no_face_defects() {
    let report = analyze(&textured_triangle());

    assert!(report.issues_by_kind(IssueKind::DegenerateFace).is_empty());
    assert!(report.issues_by_kind(IssueKind::TextureStretch).is_empty());
    assert!(report.issues_by_kind(IssueKind::HighAspectRatio).is_empty());
    assert_relative_eq!(report.metrics().uv_stretch_factor, 1.0, epsilon = 1e-6);
}

#[test]
fn right_triangle_metrics() {
    let report = analyze(&textured_triangle());
    let m = report.metrics();

    assert_relative_eq!(m.min_face_area, 0.5, epsilon = 1e-6);
    assert_relative_eq!(m.max_face_area, 0.5, epsilon = 1e-6);
    assert_relative_eq!(m.avg_face_area, 0.5, epsilon = 1e-6);
    assert_relative_eq!(m.min_aspect_ratio, 2.0, epsilon = 1e-4);
    assert_relative_eq!(m.avg_aspect_ratio, 2.0, epsilon = 1e-4);
}

#[test]
fn identical_positions_overlap_once() {
    let mesh = mesh_of(
        "twins",
        &[[0.0, 0.0, 0.0], [3.0, 1.0, 2.0], [3.0, 1.0, 2.0]],
        Vec::new(),
    );
    let report = analyze(&mesh);
    let overlaps = report.issues_by_kind(IssueKind::OverlappingVertices);

    assert_eq!(overlaps.len(), 1);
    assert_eq!(overlaps[0].element, 1);
    assert_eq!(overlaps[0].related, vec![2]);
    assert_eq!(overlaps[0].severity, 1.0);
}

#[test]
fn edge_shared_by_three_faces() {
    let mesh = mesh_of(
        "book",
        &[
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [-1.0, -1.0, 0.0],
        ],
        vec![
            Face::triangle(0, 1, 2),
            Face::triangle(0, 1, 3),
            Face::triangle(0, 1, 4),
        ],
    );
    let report = analyze(&mesh);
    let non_manifold = report.issues_by_kind(IssueKind::NonManifoldEdge);

    assert_eq!(non_manifold.len(), 1);
    assert_eq!(non_manifold[0].element, 0);
    assert_eq!(non_manifold[0].related, vec![1]);
    assert_relative_eq!(non_manifold[0].severity, 0.25, epsilon = 1e-6);
    assert_eq!(report.metrics().non_manifold_edge_count, 1);
    // The shared edge has three faces, so no dihedral angle is measured.
    assert!(report.issues_by_kind(IssueKind::SharpAngle).is_empty());
    assert!(!report.metrics().has_dihedral_data());
}

#[test]
fn isolated_vertex_has_no_valence_issue() {
    let mut mesh = unit_cube();
    mesh.vertices.push(Vertex::from_coords(10.0, 10.0, 10.0));
    let report = analyze(&mesh);

    assert!(report.issues().iter().all(|issue| issue.element != 8));
    assert!(report.issues_by_kind(IssueKind::LowValenceVertex).is_empty());
}

#[test]
fn analysis_is_repeatable() {
    let mut mesh = textured_triangle();
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));

    let mut analyzer = QualityAnalyzer::new(&mesh);
    analyzer.analyze().unwrap();
    let first_issues = analyzer.issues().to_vec();
    let first_metrics = *analyzer.metrics();

    analyzer.analyze().unwrap();
    assert_eq!(analyzer.issues(), first_issues.as_slice());
    assert_eq!(*analyzer.metrics(), first_metrics);
}

#[test]
fn filters_select_exact_subsets() {
    // Lone triangle plus a coincident vertex: low valence and overlap issues.
    let mut mesh = textured_triangle();
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.00005));
    let report = analyze(&mesh);

    for kind in IssueKind::ALL {
        let expected: Vec<_> = report.issues().iter().filter(|i| i.kind == kind).collect();
        assert_eq!(report.issues_by_kind(kind), expected);
    }
    for cutoff in [0.0, 0.3, 1.0 / 3.0, 0.5, 1.0] {
        let expected: Vec<_> = report
            .issues()
            .iter()
            .filter(|i| i.severity >= cutoff)
            .collect();
        assert_eq!(report.issues_by_severity(cutoff), expected);
    }
}

#[test]
fn issues_follow_pass_order() {
    // Degenerate sliver next to a coincident vertex pair.
    let mesh = mesh_of(
        "mixed",
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 0.0, 0.0]],
        vec![Face::triangle(0, 1, 2)],
    );
    let report = analyze(&mesh);
    let kinds: Vec<_> = report.issues().iter().map(|i| i.kind).collect();

    assert_eq!(
        kinds,
        vec![
            IssueKind::DegenerateFace,
            IssueKind::HighAspectRatio,
            IssueKind::LowValenceVertex,
            IssueKind::LowValenceVertex,
            IssueKind::LowValenceVertex,
            IssueKind::OverlappingVertices,
        ]
    );
    assert_eq!(report.metrics().degenerate_face_count, 1);
    assert_eq!(report.metrics().max_aspect_ratio, f32::MAX);
}

#[test]
fn quads_are_judged_by_leading_triangle() {
    // Corners 0,1,2 are collinear; the fourth corner would make a real quad.
    let mesh = mesh_of(
        "quad",
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 1.0, 0.0]],
        vec![Face::new(vec![0, 1, 2, 3])],
    );
    let report = analyze(&mesh);

    let degenerate = report.issues_by_kind(IssueKind::DegenerateFace);
    assert_eq!(degenerate.len(), 1);
    assert_eq!(degenerate[0].related, vec![0, 1, 2, 3]);
}

#[test]
fn short_faces_are_skipped_but_counted() {
    let mut mesh = textured_triangle();
    mesh.faces.push(Face::new(vec![0, 1]));
    let report = analyze(&mesh);

    assert_eq!(report.face_count(), 2);
    // Area is averaged over both faces.
    assert_relative_eq!(report.metrics().avg_face_area, 0.25, epsilon = 1e-6);
    assert_relative_eq!(report.metrics().min_face_area, 0.5, epsilon = 1e-6);
}

#[test]
fn strategies_report_identical_issues() {
    let mut mesh = unit_cube();
    for v in unit_cube().vertices {
        mesh.vertices.push(Vertex::new(v.position + mesh_types::Vector3::new(3e-5, 0.0, 0.0)));
    }

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

    assert_eq!(brute, hashed);
    assert_eq!(brute.issues_by_kind(IssueKind::OverlappingVertices).len(), 8);
}

#[test]
fn out_of_range_index_is_rejected() {
    let mesh = mesh_of(
        "broken",
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        vec![Face::triangle(0, 1, 2), Face::triangle(2, 1, 3)],
    );
    let result = analyze_mesh(&mesh, &QualityConfig::default());

    assert_eq!(
        result,
        Err(QualityError::InvalidIndex {
            face: 1,
            index: 3,
            vertex_count: 3,
        })
    );
}

#[test]
fn cutoff_only_filters_issues() {
    let mesh = textured_triangle();
    let all = analyze_mesh(&mesh, &QualityConfig::default()).unwrap();
    let strict = analyze_mesh(&mesh, &QualityConfig::default().with_min_severity(0.4)).unwrap();

    assert_eq!(all.issues().len(), 3);
    assert!(strict.issues().is_empty());
    assert_eq!(all.metrics(), strict.metrics());
}

#[test]
fn dihedral_minimum_is_reset_near_zero() {
    // A flat-folded pair (~0 degrees) on edge (0, 1), then a right-angle pair
    // on edge (4, 5) which sorts after it.
    let mesh = mesh_of(
        "folds",
        &[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.5, 1.0, 0.0],
            [0.5, 2.0, 0.0],
            [10.0, 0.0, 0.0],
            [11.0, 0.0, 0.0],
            [10.0, 1.0, 0.0],
            [10.0, 0.0, 1.0],
        ],
        vec![
            Face::triangle(0, 1, 2),
            Face::triangle(1, 0, 3),
            Face::triangle(4, 5, 6),
            Face::triangle(5, 4, 7),
        ],
    );
    let report = analyze(&mesh);

    // The near-zero fold is replaced by the later 90 degree edge.
    assert_relative_eq!(report.metrics().min_dihedral_angle, 90.0, epsilon = 1e-3);
    assert_relative_eq!(report.metrics().max_dihedral_angle, 90.0, epsilon = 1e-3);
    assert_eq!(report.issues_by_kind(IssueKind::SharpAngle).len(), 1);
}

#[test]
fn summary_text() {
    let report = analyze(&textured_triangle());

    let expected = "Mesh Quality Analysis for: tri\n\
                    ----------------------------------------\n\
                    Total faces: 1\n\
                    Total vertices: 3\n\
                    \n\
                    Quality Metrics:\n\
                    - Face Area: min=0.500000, max=0.500000, avg=0.500000\n\
                    - Aspect Ratio: min=2.000000, max=2.000000, avg=2.000000\n\
                    - Dihedral Angle: min=340282346638528859811704183484516925440.000000, max=0.000000 degrees\n\
                    - Non-manifold edges: 0\n\
                    - Degenerate faces: 0\n\
                    - UV stretch factor: 1.000000\n\
                    \n\
                    Issues Found:\n\
                    - Low Valence Vertex: 3\n";
    assert_eq!(report.summary(), expected);
}

#[test]
fn fresh_analyzer_reports_sentinels() {
    let mesh = textured_triangle();
    let analyzer = QualityAnalyzer::new(&mesh);
    assert_eq!(*analyzer.metrics(), QualityMetrics::default());
    assert!(analyzer.summary().contains("Total faces: 1"));
}
