//! Analysis results and summaries.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::issue::{IssueKind, MeshIssue};
use crate::metrics::QualityMetrics;

/// Outcome of analyzing one mesh.
///
/// A report is a snapshot: querying it never re-runs analysis.
///
/// # Example
///
/// ```
/// use mesh_quality::{QualityConfig, analyze_mesh};
/// use mesh_types::unit_cube;
///
/// let report = analyze_mesh(&unit_cube(), &QualityConfig::default()).unwrap();
/// assert_eq!(report.face_count(), 12);
/// assert!(report.summary().starts_with("Mesh Quality Analysis for: unit_cube"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QualityReport {
    /// Name of the analyzed mesh.
    pub mesh_name: String,
    /// Vertex count of the analyzed mesh.
    pub vertex_count: usize,
    /// Face count of the analyzed mesh.
    pub face_count: usize,
    /// Issues in detection order.
    pub issues: Vec<MeshIssue>,
    /// Aggregate metrics.
    pub metrics: QualityMetrics,
}

impl QualityReport {
    /// A report with no issues and initial metrics.
    #[must_use]
    pub fn empty(mesh_name: impl Into<String>, vertex_count: usize, face_count: usize) -> Self {
        Self {
            mesh_name: mesh_name.into(),
            vertex_count,
            face_count,
            issues: Vec::new(),
            metrics: QualityMetrics::default(),
        }
    }

    /// Name of the analyzed mesh.
    #[must_use]
    pub fn mesh_name(&self) -> &str {
        &self.mesh_name
    }

    /// Vertex count of the analyzed mesh.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Face count of the analyzed mesh.
    #[must_use]
    pub const fn face_count(&self) -> usize {
        self.face_count
    }

    /// All issues in detection order.
    #[must_use]
    pub fn issues(&self) -> &[MeshIssue] {
        &self.issues
    }

    /// Aggregate metrics.
    #[must_use]
    pub const fn metrics(&self) -> &QualityMetrics {
        &self.metrics
    }

    /// Issues of one kind, in detection order.
    #[must_use]
    pub fn issues_by_kind(&self, kind: IssueKind) -> Vec<&MeshIssue> {
        self.issues.iter().filter(|issue| issue.kind == kind).collect()
    }

    /// Issues with severity at least `min_severity`, in detection order.
    #[must_use]
    pub fn issues_by_severity(&self, min_severity: f32) -> Vec<&MeshIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity >= min_severity)
            .collect()
    }

    /// Issues ordered from most to least severe.
    ///
    /// Issues of equal severity keep their detection order.
    #[must_use]
    pub fn issues_sorted_by_severity(&self) -> Vec<&MeshIssue> {
        let mut sorted: Vec<_> = self.issues.iter().collect();
        sorted.sort_by(|a, b| b.severity.total_cmp(&a.severity));
        sorted
    }

    /// Number of issues of each kind that occurred.
    #[must_use]
    pub fn issue_counts(&self) -> BTreeMap<IssueKind, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.issues {
            *counts.entry(issue.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Check if any issue was found.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Human-readable multi-line summary, same as the `Display` output.
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mesh Quality Analysis for: {}", self.mesh_name)?;
        writeln!(f, "----------------------------------------")?;
        writeln!(f, "Total faces: {}", self.face_count)?;
        writeln!(f, "Total vertices: {}", self.vertex_count)?;
        writeln!(f)?;

        writeln!(f, "Quality Metrics:")?;
        write!(f, "{}", self.metrics)?;
        writeln!(f)?;

        writeln!(f, "Issues Found:")?;
        for (kind, count) in self.issue_counts() {
            writeln!(f, "- {kind}: {count}")?;
        }
        Ok(())
    }
}

/// Concatenate the summaries of several reports, each followed by a blank line.
///
/// This is the text shown for a model made of several meshes.
#[must_use]
pub fn model_summary(reports: &[QualityReport]) -> String {
    reports
        .iter()
        .map(|report| format!("{report}\n\n"))
        .collect()
}
