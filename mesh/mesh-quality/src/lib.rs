//! Mesh quality analysis.
//!
//! Inspects a [`PolygonMesh`](mesh_types::PolygonMesh) for defects that cause
//! rendering, simulation or texturing problems and reports them as a list of
//! [`MeshIssue`]s plus aggregate [`QualityMetrics`]:
//!
//! - Degenerate (near zero area) faces
//! - Needle and sliver faces (high aspect ratio)
//! - Non-manifold edges
//! - Vertices with unusually low or high valence
//! - Overlapping vertices
//! - Faces whose winding disagrees with their vertex normals
//! - Stretched texture mappings
//! - Sharp dihedral angles
//!
//! Analysis never modifies the mesh. Every face measurement uses the face's
//! first three corners; larger polygons are not triangulated.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with zero Bevy dependencies.
//!
//! # Example
//!
//! ```
//! use mesh_quality::{IssueKind, QualityConfig, analyze_mesh};
//! use mesh_types::{Face, PolygonMesh, Vertex};
//!
//! let mut mesh = PolygonMesh::named("sliver");
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(100.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(50.0, 1.0, 0.0));
//! mesh.faces.push(Face::triangle(0, 1, 2));
//!
//! let report = analyze_mesh(&mesh, &QualityConfig::default()).unwrap();
//! assert_eq!(report.issues_by_kind(IssueKind::HighAspectRatio).len(), 1);
//! println!("{}", report.summary());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod analyzer;
pub mod checks;
mod config;
mod error;
pub mod geometry;
mod issue;
mod metrics;
mod report;

pub use adjacency::MeshAdjacency;
pub use analyzer::{QualityAnalyzer, analyze_mesh, analyze_meshes};
pub use config::{OverlapStrategy, QualityConfig};
pub use error::{QualityError, QualityResult};
pub use issue::{ElementKind, IssueKind, MeshIssue};
pub use metrics::{DihedralRange, PassStats, QualityMetrics, UNSET_MIN, ValueRange};
pub use report::{QualityReport, model_summary};

// Re-export the pass interface at the crate root
pub use checks::{CheckOutcome, QualityCheck, default_checks};
