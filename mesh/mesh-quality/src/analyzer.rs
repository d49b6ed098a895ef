//! Analysis entry points.

use std::time::Instant;

use mesh_types::{MeshTopology, PolygonMesh};
use tracing::{debug, info};

use crate::adjacency::MeshAdjacency;
use crate::checks::default_checks;
use crate::config::QualityConfig;
use crate::error::QualityResult;
use crate::issue::{IssueKind, MeshIssue};
use crate::metrics::QualityMetrics;
use crate::report::QualityReport;

/// Run every detection pass over a mesh.
///
/// Builds the topology once, runs the passes in their fixed order and folds
/// their metrics. Issues below `config.min_severity` are dropped; metrics
/// always cover every element. The mesh is not modified.
///
/// # Errors
///
/// Returns [`QualityError::InvalidConfig`] if the configuration fails
/// validation, or [`QualityError::InvalidIndex`] if a face references a
/// vertex that does not exist.
///
/// [`QualityError::InvalidConfig`]: crate::QualityError::InvalidConfig
/// [`QualityError::InvalidIndex`]: crate::QualityError::InvalidIndex
///
/// # Example
///
/// ```
/// use mesh_quality::{IssueKind, QualityConfig, analyze_mesh};
/// use mesh_types::{MeshTopology, PolygonMesh};
///
/// // Two triangles whose first corners coincide.
/// let mesh = PolygonMesh::from_raw(
///     &[
///         0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
///         0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0,
///     ],
///     &[0, 1, 2, 3, 4, 5],
/// );
///
/// let report = analyze_mesh(&mesh, &QualityConfig::default()).unwrap();
/// assert_eq!(report.issues_by_kind(IssueKind::OverlappingVertices).len(), 1);
/// ```
pub fn analyze_mesh(mesh: &PolygonMesh, config: &QualityConfig) -> QualityResult<QualityReport> {
    config.validate()?;
    let start = Instant::now();

    let topology = MeshAdjacency::try_build(&mesh.faces, mesh.vertex_count())?;
    debug!(
        vertices = topology.vertex_count(),
        edges = topology.edge_count(),
        skipped_faces = topology.skipped_faces(),
        "Built mesh topology"
    );

    let mut issues = Vec::new();
    let mut metrics = QualityMetrics::default();

    for check in default_checks(config) {
        let outcome = check.run(mesh, &topology);
        debug!(
            check = check.name(),
            issues = outcome.issues.len(),
            "Quality check complete"
        );

        if let Some(stats) = outcome.stats {
            metrics.apply(stats);
        }
        issues.extend(
            outcome
                .issues
                .into_iter()
                .filter(|issue| config.keeps(issue.severity)),
        );
    }

    let time_ms = start.elapsed().as_secs_f64() * 1000.0;
    info!(
        mesh = %mesh.name,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        issues = issues.len(),
        time_ms,
        "Mesh quality analysis complete"
    );

    Ok(QualityReport {
        mesh_name: mesh.name.clone(),
        vertex_count: mesh.vertex_count(),
        face_count: mesh.face_count(),
        issues,
        metrics,
    })
}

/// Analyze every mesh of a model with the same configuration.
///
/// # Errors
///
/// Returns the first error produced by [`analyze_mesh`].
pub fn analyze_meshes<'a, I>(meshes: I, config: &QualityConfig) -> QualityResult<Vec<QualityReport>>
where
    I: IntoIterator<Item = &'a PolygonMesh>,
{
    meshes
        .into_iter()
        .map(|mesh| analyze_mesh(mesh, config))
        .collect()
}

/// Stateful wrapper around [`analyze_mesh`] bound to one mesh.
///
/// Holds the most recent results. Before the first successful
/// [`analyze`](Self::analyze) call, and after a failed one, the results are
/// empty and metrics hold their initial values.
///
/// # Example
///
/// ```
/// use mesh_quality::QualityAnalyzer;
/// use mesh_types::unit_cube;
///
/// let cube = unit_cube();
/// let mut analyzer = QualityAnalyzer::new(&cube);
/// analyzer.analyze().unwrap();
///
/// assert_eq!(analyzer.metrics().non_manifold_edge_count, 0);
/// println!("{}", analyzer.summary());
/// ```
#[derive(Debug, Clone)]
pub struct QualityAnalyzer<'a> {
    mesh: &'a PolygonMesh,
    config: QualityConfig,
    report: QualityReport,
}

impl<'a> QualityAnalyzer<'a> {
    /// Create an analyzer with the default configuration.
    #[must_use]
    pub fn new(mesh: &'a PolygonMesh) -> Self {
        Self {
            mesh,
            config: QualityConfig::default(),
            report: empty_report(mesh),
        }
    }

    /// Create an analyzer with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::InvalidConfig`](crate::QualityError::InvalidConfig)
    /// if the configuration fails validation.
    pub fn with_config(mesh: &'a PolygonMesh, config: QualityConfig) -> QualityResult<Self> {
        config.validate()?;
        Ok(Self {
            mesh,
            config,
            report: empty_report(mesh),
        })
    }

    /// Run all detection passes, replacing any previous results.
    ///
    /// # Errors
    ///
    /// See [`analyze_mesh`]. On error the previous results are cleared.
    pub fn analyze(&mut self) -> QualityResult<()> {
        self.report = empty_report(self.mesh);
        self.report = analyze_mesh(self.mesh, &self.config)?;
        Ok(())
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// The most recent results.
    #[must_use]
    pub const fn report(&self) -> &QualityReport {
        &self.report
    }

    /// Consume the analyzer, keeping its results.
    #[must_use]
    pub fn into_report(self) -> QualityReport {
        self.report
    }

    /// All issues in detection order.
    #[must_use]
    pub fn issues(&self) -> &[MeshIssue] {
        self.report.issues()
    }

    /// Aggregate metrics.
    #[must_use]
    pub const fn metrics(&self) -> &QualityMetrics {
        self.report.metrics()
    }

    /// Issues of one kind, in detection order.
    #[must_use]
    pub fn issues_by_kind(&self, kind: IssueKind) -> Vec<&MeshIssue> {
        self.report.issues_by_kind(kind)
    }

    /// Issues with severity at least `min_severity`, in detection order.
    #[must_use]
    pub fn issues_by_severity(&self, min_severity: f32) -> Vec<&MeshIssue> {
        self.report.issues_by_severity(min_severity)
    }

    /// Human-readable multi-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        self.report.summary()
    }
}

fn empty_report(mesh: &PolygonMesh) -> QualityReport {
    QualityReport::empty(mesh.name.clone(), mesh.vertex_count(), mesh.face_count())
}
