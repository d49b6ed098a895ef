//! Analysis configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{QualityError, QualityResult};

/// How the overlapping-vertices pass finds candidate pairs.
///
/// Both strategies report the same issues in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverlapStrategy {
    /// Compare every pair of vertices. Quadratic in the vertex count.
    BruteForce,
    /// Bucket vertices into a uniform grid and compare only neighbouring cells.
    #[default]
    SpatialHash,
}

/// Parameters for a quality analysis run.
///
/// Detection thresholds are fixed (see [`crate::checks`]); this only controls
/// which detected issues are kept and how overlaps are searched.
///
/// # Example
///
/// ```
/// use mesh_quality::{OverlapStrategy, QualityConfig};
///
/// let config = QualityConfig::default()
///     .with_min_severity(0.25)
///     .with_overlap_strategy(OverlapStrategy::BruteForce);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QualityConfig {
    /// Issues with a severity below this are dropped after detection.
    ///
    /// Metrics are computed from every element regardless.
    /// Default: `0.0` (keep everything)
    pub min_severity: f32,

    /// Candidate search used by the overlapping-vertices pass.
    ///
    /// Default: [`OverlapStrategy::SpatialHash`]
    pub overlap_strategy: OverlapStrategy,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            min_severity: 0.0,
            overlap_strategy: OverlapStrategy::default(),
        }
    }
}

impl QualityConfig {
    /// Keep only issues of at least moderate severity.
    ///
    /// Useful for a first look at a large model where minor issues are noise.
    #[must_use]
    pub fn triage() -> Self {
        Self {
            min_severity: 0.5,
            ..Default::default()
        }
    }

    /// Set the severity cutoff.
    #[must_use]
    pub const fn with_min_severity(mut self, min_severity: f32) -> Self {
        self.min_severity = min_severity;
        self
    }

    /// Set the overlap search strategy.
    #[must_use]
    pub const fn with_overlap_strategy(mut self, strategy: OverlapStrategy) -> Self {
        self.overlap_strategy = strategy;
        self
    }

    /// Check that the parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::InvalidConfig`] if `min_severity` is not a
    /// finite value in `[0, 1]`.
    pub fn validate(&self) -> QualityResult<()> {
        if !self.min_severity.is_finite() || !(0.0..=1.0).contains(&self.min_severity) {
            return Err(QualityError::InvalidConfig {
                reason: format!(
                    "min_severity must be a finite value in [0, 1], got {}",
                    self.min_severity
                ),
            });
        }
        Ok(())
    }

    /// Whether an issue of this severity survives the cutoff.
    #[must_use]
    pub fn keeps(&self, severity: f32) -> bool {
        severity >= self.min_severity
    }
}
