//! Aggregate quality metrics.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Initial value of every running minimum. A minimum still equal to this
/// after analysis means "no data", not a measurement.
pub const UNSET_MIN: f32 = f32::MAX;

/// Aggregate statistics for one analysis run.
///
/// Minimums start at [`UNSET_MIN`]; maximums, averages and counts start at
/// zero. A field keeps its initial value when no element contributed to it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QualityMetrics {
    /// Smallest leading-triangle area.
    #[cfg_attr(feature = "serde", serde(with = "non_finite"))]
    pub min_face_area: f32,
    /// Largest leading-triangle area.
    #[cfg_attr(feature = "serde", serde(with = "non_finite"))]
    pub max_face_area: f32,
    /// Total leading-triangle area divided by the face count.
    #[cfg_attr(feature = "serde", serde(with = "non_finite"))]
    pub avg_face_area: f32,
    /// Smallest aspect ratio.
    #[cfg_attr(feature = "serde", serde(with = "non_finite"))]
    pub min_aspect_ratio: f32,
    /// Largest aspect ratio.
    #[cfg_attr(feature = "serde", serde(with = "non_finite"))]
    pub max_aspect_ratio: f32,
    /// Sum of aspect ratios divided by the face count.
    #[cfg_attr(feature = "serde", serde(with = "non_finite"))]
    pub avg_aspect_ratio: f32,
    /// Smallest dihedral angle in degrees, see [`DihedralRange`].
    #[cfg_attr(feature = "serde", serde(with = "non_finite"))]
    pub min_dihedral_angle: f32,
    /// Largest dihedral angle in degrees.
    #[cfg_attr(feature = "serde", serde(with = "non_finite"))]
    pub max_dihedral_angle: f32,
    /// Edges shared by more than two faces.
    pub non_manifold_edge_count: usize,
    /// Faces below the degenerate area threshold.
    pub degenerate_face_count: usize,
    /// Mean UV stretch over faces whose stretch is measurable.
    #[cfg_attr(feature = "serde", serde(with = "non_finite"))]
    pub uv_stretch_factor: f32,
}

impl Default for QualityMetrics {
    fn default() -> Self {
        Self {
            min_face_area: UNSET_MIN,
            max_face_area: 0.0,
            avg_face_area: 0.0,
            min_aspect_ratio: UNSET_MIN,
            max_aspect_ratio: 0.0,
            avg_aspect_ratio: 0.0,
            min_dihedral_angle: UNSET_MIN,
            max_dihedral_angle: 0.0,
            non_manifold_edge_count: 0,
            degenerate_face_count: 0,
            uv_stretch_factor: 0.0,
        }
    }
}

impl QualityMetrics {
    /// Fold one pass's contribution into the record.
    pub fn apply(&mut self, stats: PassStats) {
        match stats {
            PassStats::FaceArea {
                range,
                degenerate_count,
            } => {
                self.degenerate_face_count += degenerate_count;
                if let Some(range) = range {
                    self.min_face_area = range.min;
                    self.max_face_area = range.max;
                    self.avg_face_area = range.avg;
                }
            }
            PassStats::AspectRatio(range) => {
                self.min_aspect_ratio = range.min;
                self.max_aspect_ratio = range.max;
                self.avg_aspect_ratio = range.avg;
            }
            PassStats::NonManifoldEdges(count) => {
                self.non_manifold_edge_count += count;
            }
            PassStats::UvStretch(avg) => {
                self.uv_stretch_factor = avg;
            }
            PassStats::Dihedral(range) => {
                self.min_dihedral_angle = range.min;
                self.max_dihedral_angle = range.max;
            }
        }
    }

    /// Whether any face contributed an area measurement.
    #[must_use]
    pub fn has_face_data(&self) -> bool {
        self.min_face_area < UNSET_MIN
    }

    /// Whether any manifold edge contributed a dihedral angle.
    #[must_use]
    pub fn has_dihedral_data(&self) -> bool {
        self.min_dihedral_angle < UNSET_MIN
    }
}

impl fmt::Display for QualityMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Face Area: min={:.6}, max={:.6}, avg={:.6}",
            self.min_face_area, self.max_face_area, self.avg_face_area
        )?;
        writeln!(
            f,
            "- Aspect Ratio: min={:.6}, max={:.6}, avg={:.6}",
            self.min_aspect_ratio, self.max_aspect_ratio, self.avg_aspect_ratio
        )?;
        writeln!(
            f,
            "- Dihedral Angle: min={:.6}, max={:.6} degrees",
            self.min_dihedral_angle, self.max_dihedral_angle
        )?;
        writeln!(f, "- Non-manifold edges: {}", self.non_manifold_edge_count)?;
        writeln!(f, "- Degenerate faces: {}", self.degenerate_face_count)?;
        writeln!(f, "- UV stretch factor: {:.6}", self.uv_stretch_factor)
    }
}

/// Serde adapter for metric fields that may hold infinity or NaN.
///
/// Finite values are written as numbers. Non-finite values are written as
/// the strings `"inf"`, `"-inf"` and `"NaN"`, since formats such as JSON
/// have no number literal for them.
#[cfg(feature = "serde")]
mod non_finite {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f32),
        Text(String),
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f32(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(f32::INFINITY),
                "-inf" => Ok(f32::NEG_INFINITY),
                "NaN" => Ok(f32::NAN),
                other => Err(D::Error::invalid_value(
                    Unexpected::Str(other),
                    &"a number, \"inf\", \"-inf\" or \"NaN\"",
                )),
            },
        }
    }
}

/// Metrics contribution of a single detection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PassStats {
    /// Face areas; `range` is `None` when the mesh has no faces.
    FaceArea {
        /// Min, max and per-face average area.
        range: Option<ValueRange>,
        /// Faces flagged as degenerate.
        degenerate_count: usize,
    },
    /// Aspect ratios over a non-empty face list.
    AspectRatio(ValueRange),
    /// Number of non-manifold edges found.
    NonManifoldEdges(usize),
    /// Mean stretch over measurable faces.
    UvStretch(f32),
    /// Dihedral angles over manifold edges.
    Dihedral(DihedralRange),
}

/// Final min, max and average of a per-element value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    /// Smallest observed value.
    pub min: f32,
    /// Largest observed value.
    pub max: f32,
    /// Sum of observed values divided by the element count.
    pub avg: f32,
}

/// Accumulates min, max and total of a per-element value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunningRange {
    min: f32,
    max: f32,
    total: f32,
}

impl RunningRange {
    pub(crate) const fn new() -> Self {
        Self {
            min: UNSET_MIN,
            max: 0.0,
            total: 0.0,
        }
    }

    pub(crate) fn observe(&mut self, value: f32) {
        self.total += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Close the range, averaging over `count` elements. Returns `None` for
    /// an empty element list so callers keep the initial metric values.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn finish(self, count: usize) -> Option<ValueRange> {
        (count > 0).then(|| ValueRange {
            min: self.min,
            max: self.max,
            avg: self.total / count as f32,
        })
    }
}

/// Running dihedral angle range.
///
/// The minimum is replaced when a new angle is smaller **or** when the
/// stored minimum is below 0.1 degrees. The first angle therefore always
/// replaces the initial [`UNSET_MIN`], and a stored minimum that lands in
/// `[0, 0.1)` is overwritten by whatever angle comes next, even a larger one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DihedralRange {
    /// Tracked minimum in degrees.
    pub min: f32,
    /// Tracked maximum in degrees.
    pub max: f32,
}

impl DihedralRange {
    /// Stored minimums below this are replaced by the next angle.
    pub const RESET_BELOW: f32 = 0.1;

    /// An empty range holding the initial metric values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: UNSET_MIN,
            max: 0.0,
        }
    }

    /// Record one angle.
    pub fn observe(&mut self, angle: f32) {
        if angle < self.min || self.min < Self::RESET_BELOW {
            self.min = angle;
        }
        if angle > self.max {
            self.max = angle;
        }
    }
}

impl Default for DihedralRange {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sentinels() {
        let m = QualityMetrics::default();
        assert_eq!(m.min_face_area, f32::MAX);
        assert_eq!(m.min_aspect_ratio, f32::MAX);
        assert_eq!(m.min_dihedral_angle, f32::MAX);
        assert_eq!(m.max_face_area, 0.0);
        assert_eq!(m.uv_stretch_factor, 0.0);
        assert!(!m.has_face_data());
        assert!(!m.has_dihedral_data());
    }

    #[test]
    fn running_range_averages_over_given_count() {
        let mut range = RunningRange::new();
        range.observe(1.0);
        range.observe(3.0);
        let done = range.finish(4);
        assert_eq!(
            done,
            Some(ValueRange {
                min: 1.0,
                max: 3.0,
                avg: 1.0,
            })
        );
    }

    #[test]
    fn running_range_empty_is_none() {
        assert_eq!(RunningRange::new().finish(0), None);
    }

    #[test]
    fn running_range_without_observations_keeps_sentinels() {
        // Faces exist but none were measurable.
        let done = RunningRange::new().finish(2);
        assert_eq!(
            done,
            Some(ValueRange {
                min: UNSET_MIN,
                max: 0.0,
                avg: 0.0,
            })
        );
    }

    #[test]
    fn dihedral_first_angle_replaces_sentinel() {
        let mut range = DihedralRange::new();
        range.observe(90.0);
        assert_eq!(range.min, 90.0);
        assert_eq!(range.max, 90.0);
        range.observe(120.0);
        assert_eq!(range.min, 90.0);
        range.observe(45.0);
        assert_eq!(range.min, 45.0);
    }

    #[test]
    fn dihedral_near_zero_minimum_is_overwritten_upward() {
        let mut range = DihedralRange::new();
        range.observe(60.0);
        range.observe(0.05);
        assert_eq!(range.min, 0.05);
        range.observe(170.0);
        assert_eq!(range.min, 170.0);
        assert_eq!(range.max, 170.0);
    }

    #[test]
    fn apply_face_area_without_range_only_counts() {
        let mut m = QualityMetrics::default();
        m.apply(PassStats::FaceArea {
            range: None,
            degenerate_count: 0,
        });
        assert_eq!(m, QualityMetrics::default());
    }

    #[test]
    fn apply_overwrites_fields() {
        let mut m = QualityMetrics::default();
        m.apply(PassStats::AspectRatio(ValueRange {
            min: 1.0,
            max: 2.0,
            avg: 1.5,
        }));
        m.apply(PassStats::NonManifoldEdges(3));
        m.apply(PassStats::UvStretch(1.25));
        assert_eq!(m.min_aspect_ratio, 1.0);
        assert_eq!(m.avg_aspect_ratio, 1.5);
        assert_eq!(m.non_manifold_edge_count, 3);
        assert_eq!(m.uv_stretch_factor, 1.25);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn non_finite_metrics_serialization() {
        let metrics = QualityMetrics {
            avg_aspect_ratio: f32::INFINITY,
            min_dihedral_angle: f32::NEG_INFINITY,
            uv_stretch_factor: f32::NAN,
            ..QualityMetrics::default()
        };

        let json = serde_json::to_string(&metrics).unwrap_or_default();
        assert!(json.contains("\"avg_aspect_ratio\":\"inf\""));
        assert!(json.contains("\"min_dihedral_angle\":\"-inf\""));
        assert!(json.contains("\"uv_stretch_factor\":\"NaN\""));

        let parsed: Result<QualityMetrics, _> = serde_json::from_str(&json);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.avg_aspect_ratio, f32::INFINITY);
            assert_eq!(parsed.min_dihedral_angle, f32::NEG_INFINITY);
            assert!(parsed.uv_stretch_factor.is_nan());
            assert_eq!(parsed.min_face_area, f32::MAX);
            assert_eq!(parsed.max_face_area, 0.0);
        }
    }

    #[test]
    #[cfg(feature = "serde")]
    fn unknown_metric_text_is_rejected() {
        let mut value = serde_json::to_value(QualityMetrics::default()).unwrap_or_default();
        value["avg_face_area"] = serde_json::Value::from("huge");
        assert!(serde_json::from_value::<QualityMetrics>(value).is_err());
    }

    #[test]
    fn display_lists_every_field() {
        let text = QualityMetrics::default().to_string();
        assert!(text.contains("- Face Area: min="));
        assert!(text.contains("- Aspect Ratio: min="));
        assert!(text.contains("degrees"));
        assert!(text.contains("- Non-manifold edges: 0"));
        assert!(text.contains("- Degenerate faces: 0"));
        assert!(text.contains("- UV stretch factor: 0.000000"));
    }
}
