//! Mesh quality toolkit.
//!
//! This umbrella crate re-exports the mesh-* crates, providing a unified API
//! for inspecting polygon meshes. All crates are Layer 0 (zero Bevy
//! dependencies) and can be used in CLI tools, WASM, servers, or viewers.
//!
//! # Quick Start
//!
//! ```
//! use mesh::prelude::*;
//!
//! let cube = unit_cube();
//!
//! // One-shot analysis
//! let report = analyze_mesh(&cube, &QualityConfig::default()).unwrap();
//! assert!(!report.has_issues());
//!
//! // Worst issues first, ignoring minor ones
//! let config = QualityConfig::triage();
//! let report = analyze_mesh(&cube, &config).unwrap();
//! for issue in report.issues_sorted_by_severity() {
//!     println!("{issue}");
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `PolygonMesh`, `Face`, `Vertex`, `Triangle`
//! - [`quality`] - Topology, geometric metrics and defect detection

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `PolygonMesh`, `Face`, `Vertex`, `Triangle`.
pub use mesh_types as types;

/// Topology, geometric metrics and defect detection.
pub use mesh_quality as quality;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for mesh quality analysis.
///
/// This module re-exports the most commonly used types and traits.
///
/// # Usage
///
/// ```
/// use mesh::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mesh_types::{Face, MeshTopology, PolygonMesh, Triangle, Vertex, unit_cube};

    // Analysis
    pub use mesh_quality::{
        IssueKind, MeshIssue, QualityAnalyzer, QualityConfig, QualityMetrics, QualityReport,
        analyze_mesh,
    };
}

// =============================================================================
// Tests
// =============================================================================
