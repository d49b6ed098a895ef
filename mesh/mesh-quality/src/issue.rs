//! Quality issue records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of defect an issue reports.
///
/// Variants are ordered; summaries group issue counts by this order rather
/// than by detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IssueKind {
    /// Face whose leading triangle has (near) zero area.
    DegenerateFace,
    /// Face whose leading triangle is a needle or sliver.
    HighAspectRatio,
    /// Two distinct vertices at (nearly) the same position.
    OverlappingVertices,
    /// Edge shared by more than two faces.
    NonManifoldEdge,
    /// Face whose winding disagrees with its vertices' shading normals.
    InvertedNormal,
    /// Vertex with too many neighbours.
    HighValenceVertex,
    /// Vertex with too few neighbours.
    LowValenceVertex,
    /// Face whose texture mapping is strongly stretched or compressed.
    TextureStretch,
    /// Manifold edge whose faces meet at a small normal angle.
    SharpAngle,
}

impl IssueKind {
    /// Every kind, in ordinal order.
    pub const ALL: [Self; 9] = [
        Self::DegenerateFace,
        Self::HighAspectRatio,
        Self::OverlappingVertices,
        Self::NonManifoldEdge,
        Self::InvertedNormal,
        Self::HighValenceVertex,
        Self::LowValenceVertex,
        Self::TextureStretch,
        Self::SharpAngle,
    ];

    /// Human-readable name used in summaries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DegenerateFace => "Degenerate Face",
            Self::HighAspectRatio => "High Aspect Ratio",
            Self::OverlappingVertices => "Overlapping Vertices",
            Self::NonManifoldEdge => "Non-manifold Edge",
            Self::InvertedNormal => "Inverted Normal",
            Self::HighValenceVertex => "High Valence Vertex",
            Self::LowValenceVertex => "Low Valence Vertex",
            Self::TextureStretch => "Texture Stretch",
            Self::SharpAngle => "Sharp Angle",
        }
    }

    /// What [`MeshIssue::element`] indexes for this kind.
    #[must_use]
    pub const fn element_kind(self) -> ElementKind {
        match self {
            Self::DegenerateFace
            | Self::HighAspectRatio
            | Self::InvertedNormal
            | Self::TextureStretch => ElementKind::Face,
            Self::OverlappingVertices | Self::HighValenceVertex | Self::LowValenceVertex => {
                ElementKind::Vertex
            }
            Self::NonManifoldEdge | Self::SharpAngle => ElementKind::Edge,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The mesh element an issue points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementKind {
    /// `element` is a face index; `related` holds the face's vertex ring.
    Face,
    /// `element` is a vertex index; `related` holds other vertex indices.
    Vertex,
    /// `element` is the lower endpoint of an edge; `related` holds the upper.
    Edge,
}

/// A single detected defect.
///
/// Issues are immutable once created. `severity` is normalized to `[0, 1]`,
/// higher is worse.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshIssue {
    /// What was detected.
    pub kind: IssueKind,
    /// Primary face, vertex, or lower edge endpoint implicated.
    pub element: usize,
    /// Normalized badness in `[0, 1]`.
    pub severity: f32,
    /// Auxiliary indices, see [`ElementKind`].
    pub related: Vec<usize>,
}

impl MeshIssue {
    /// Create an issue.
    #[must_use]
    pub fn new(kind: IssueKind, element: usize, severity: f32, related: Vec<usize>) -> Self {
        Self {
            kind,
            element,
            severity,
            related,
        }
    }

    /// Create an issue against a face, relating every vertex of its ring.
    #[must_use]
    pub fn for_face(kind: IssueKind, face: usize, severity: f32, ring: &[u32]) -> Self {
        Self::new(kind, face, severity, widen(ring))
    }

    /// Create an issue against the edge `(lo, hi)`.
    #[must_use]
    pub fn for_edge(kind: IssueKind, (lo, hi): (u32, u32), severity: f32) -> Self {
        Self::new(kind, lo as usize, severity, vec![hi as usize])
    }

    /// Create an issue against a vertex, relating the given vertices.
    #[must_use]
    pub fn for_vertex(kind: IssueKind, vertex: usize, severity: f32, related: &[u32]) -> Self {
        Self::new(kind, vertex, severity, widen(related))
    }
}

impl fmt::Display for MeshIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let element = match self.kind.element_kind() {
            ElementKind::Face => "face",
            ElementKind::Vertex => "vertex",
            ElementKind::Edge => "edge",
        };
        write!(
            f,
            "{} at {} {} (severity {:.3})",
            self.kind, element, self.element, self.severity
        )
    }
}

fn widen(indices: &[u32]) -> Vec<usize> {
    indices.iter().map(|&i| i as usize).collect()
}
