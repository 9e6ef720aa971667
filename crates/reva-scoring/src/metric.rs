//! Metric vocabulary: kinds, aggregation policies, normalization.
//!
//! Every metric declares its own cross-file combination rule — mean
//! for continuous metrics, max for "worst offender" metrics — rather
//! than assuming uniform averaging. Declaration order in
//! [`MetricKind::ALL`] is the canonical order for sub-score iteration
//! and recommendation output, which keeps reports deterministic.

use serde::{Deserialize, Serialize};

use crate::config::Normalization;

/// How a metric's per-file values combine into one aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Arithmetic mean across files.
    Mean,

    /// Worst offender: the maximum across files.
    Max,
}

/// The metrics the scoring engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Branch-point count per file. The shipped provider is a keyword
    /// heuristic; any real analyzer can stand behind the same kind.
    Complexity,

    /// Ratio of duplicated lines, 0.0–1.0.
    Duplication,

    /// Ratio of comment lines to code lines, 0.0–1.0.
    Documentation,

    /// Largest parameter list in the file.
    ParameterCount,

    /// Deepest block nesting in the file.
    NestingDepth,
}

impl MetricKind {
    /// All metrics, in declaration order.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Complexity,
        MetricKind::Duplication,
        MetricKind::Documentation,
        MetricKind::ParameterCount,
        MetricKind::NestingDepth,
    ];

    /// Stable metric name used as the sub-score key.
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Complexity => "complexity",
            MetricKind::Duplication => "duplication",
            MetricKind::Documentation => "documentation",
            MetricKind::ParameterCount => "parameter_count",
            MetricKind::NestingDepth => "nesting_depth",
        }
    }

    /// Cross-file combination rule for this metric.
    pub fn aggregation(&self) -> Aggregation {
        match self {
            MetricKind::Complexity | MetricKind::Duplication | MetricKind::Documentation => {
                Aggregation::Mean
            }
            // Structural extremes matter more than their average.
            MetricKind::ParameterCount | MetricKind::NestingDepth => Aggregation::Max,
        }
    }

    /// Normalize an aggregated raw value to a 0–100 sub-score.
    ///
    /// Metrics where lower raw values are better (complexity,
    /// duplication, parameters, nesting) are inverse-scaled against
    /// their configured ceiling; documentation scales up toward its
    /// target ratio. All results are clamped to [0, 100].
    pub fn normalize(&self, raw: f64, norms: &Normalization) -> f64 {
        let score = match self {
            MetricKind::Complexity => (1.0 - raw / norms.max_complexity) * 100.0,
            MetricKind::Duplication => (1.0 - raw) * 100.0,
            MetricKind::Documentation => raw / norms.target_doc_ratio * 100.0,
            MetricKind::ParameterCount => (1.0 - raw / norms.max_parameters) * 100.0,
            MetricKind::NestingDepth => (1.0 - raw / norms.max_nesting) * 100.0,
        };
        score.clamp(0.0, 100.0)
    }

    /// Templated recommendation for a weak sub-score on this metric.
    pub fn recommendation(&self) -> &'static str {
        match self {
            MetricKind::Complexity => {
                "Reduce cyclomatic complexity: split large functions into smaller units"
            }
            MetricKind::Duplication => {
                "Remove duplicated logic blocks: extract shared helpers"
            }
            MetricKind::Documentation => {
                "Increase documentation coverage: add comments to public items"
            }
            MetricKind::ParameterCount => {
                "Reduce parameter counts: group related parameters into structs"
            }
            MetricKind::NestingDepth => {
                "Flatten deeply nested conditionals: prefer early returns"
            }
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
