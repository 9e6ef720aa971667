//! Scoring configuration: weights, quality thresholds, normalization.
//!
//! Treated as read-only once constructed; customization clones the
//! defaults rather than mutating shared state, so concurrent scoring
//! calls never observe a half-edited configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};
use crate::metric::MetricKind;

/// Ordered quality levels derived from the composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    Critical,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl std::fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            QualityLevel::Critical => "critical",
            QualityLevel::Poor => "poor",
            QualityLevel::Fair => "fair",
            QualityLevel::Good => "good",
            QualityLevel::Excellent => "excellent",
        };
        write!(f, "{s}")
    }
}

/// One classification cut point: indexes at or above `min_index`
/// (inclusive lower bound) map to `level`, unless a higher band
/// claimed them first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityThreshold {
    pub min_index: f64,
    pub level: QualityLevel,
}

/// Scaling ceilings/targets used when normalizing raw metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    /// Raw complexity at or above this scores 0.
    pub max_complexity: f64,

    /// Parameter count at or above this scores 0.
    pub max_parameters: f64,

    /// Nesting depth at or above this scores 0.
    pub max_nesting: f64,

    /// Comment ratio at or above this scores 100.
    pub target_doc_ratio: f64,
}

impl Default for Normalization {
    fn default() -> Self {
        Self {
            max_complexity: 50.0,
            max_parameters: 10.0,
            max_nesting: 6.0,
            target_doc_ratio: 0.2,
        }
    }
}

/// Weights and thresholds for one scoring invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Relative metric weights; must sum to 1.0 within
    /// [`ScoringConfig::WEIGHT_EPSILON`].
    pub weights: HashMap<MetricKind, f64>,

    /// Classification bands, scanned from highest to lowest.
    pub thresholds: Vec<QualityThreshold>,

    /// Normalization ceilings/targets.
    pub normalization: Normalization,

    /// Sub-scores below this band trigger a recommendation.
    pub warning_band: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let mut weights = HashMap::new();
        weights.insert(MetricKind::Complexity, 0.30);
        weights.insert(MetricKind::Duplication, 0.20);
        weights.insert(MetricKind::Documentation, 0.15);
        weights.insert(MetricKind::ParameterCount, 0.15);
        weights.insert(MetricKind::NestingDepth, 0.20);

        Self {
            weights,
            thresholds: vec![
                QualityThreshold {
                    min_index: 85.0,
                    level: QualityLevel::Excellent,
                },
                QualityThreshold {
                    min_index: 70.0,
                    level: QualityLevel::Good,
                },
                QualityThreshold {
                    min_index: 55.0,
                    level: QualityLevel::Fair,
                },
                QualityThreshold {
                    min_index: 40.0,
                    level: QualityLevel::Poor,
                },
                QualityThreshold {
                    min_index: 0.0,
                    level: QualityLevel::Critical,
                },
            ],
            normalization: Normalization::default(),
            warning_band: 60.0,
        }
    }
}

impl ScoringConfig {
    /// Tolerance when checking that weights sum to 1.0.
    pub const WEIGHT_EPSILON: f64 = 1e-6;

    /// Replace the weight table (copy-on-customize).
    pub fn with_weights(mut self, weights: HashMap<MetricKind, f64>) -> Self {
        self.weights = weights;
        self
    }

    /// Replace the classification bands (copy-on-customize).
    pub fn with_thresholds(mut self, thresholds: Vec<QualityThreshold>) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Weight for a metric; unweighted metrics contribute nothing.
    pub fn weight(&self, kind: MetricKind) -> f64 {
        self.weights.get(&kind).copied().unwrap_or(0.0)
    }

    /// Validate weights and thresholds.
    ///
    /// Called by the engine before any index is computed, so a broken
    /// configuration can never produce a misleading score.
    pub fn validate(&self) -> Result<()> {
        for (kind, weight) in &self.weights {
            if *weight < 0.0 {
                return Err(ScoringError::NegativeWeight {
                    metric: kind.name().to_string(),
                    weight: *weight,
                });
            }
        }

        let sum: f64 = self.weights.values().sum();
        if (sum - 1.0).abs() > Self::WEIGHT_EPSILON {
            return Err(ScoringError::InvalidWeights { sum });
        }

        if self.thresholds.is_empty() {
            return Err(ScoringError::InvalidThresholds(
                "at least one threshold band is required".to_string(),
            ));
        }
        for pair in self.thresholds.windows(2) {
            if pair[0].min_index <= pair[1].min_index {
                return Err(ScoringError::InvalidThresholds(
                    "bands must be in strictly descending min_index order".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Map a composite index to a quality level.
    ///
    /// Scans bands from highest to lowest and picks the first whose
    /// inclusive lower bound the index satisfies; a boundary index
    /// therefore resolves to the higher level.
    pub fn classify(&self, index: f64) -> QualityLevel {
        for band in &self.thresholds {
            if index >= band.min_index {
                return band.level;
            }
        }
        // Below every band (possible when the lowest min_index > 0).
        self.thresholds
            .last()
            .map(|b| b.level)
            .unwrap_or(QualityLevel::Critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let config = ScoringConfig::default();
        assert!(config.validate().is_ok());

        let sum: f64 = config.weights.values().sum();
        assert!((sum - 1.0).abs() < ScoringConfig::WEIGHT_EPSILON);
    }

    #[test]
    fn test_overweighted_config_rejected() {
        let mut weights = HashMap::new();
        weights.insert(MetricKind::Complexity, 0.8);
        weights.insert(MetricKind::Duplication, 0.5);
        let config = ScoringConfig::default().with_weights(weights);

        match config.validate() {
            Err(ScoringError::InvalidWeights { sum }) => {
                assert!((sum - 1.3).abs() < 1e-9);
            }
            other => panic!("expected InvalidWeights, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut weights = HashMap::new();
        weights.insert(MetricKind::Complexity, 1.2);
        weights.insert(MetricKind::Duplication, -0.2);
        let config = ScoringConfig::default().with_weights(weights);
        assert!(matches!(
            config.validate(),
            Err(ScoringError::NegativeWeight { .. })
        ));
    }

    #[test]
    fn test_unordered_thresholds_rejected() {
        let config = ScoringConfig::default().with_thresholds(vec![
            QualityThreshold {
                min_index: 40.0,
                level: QualityLevel::Poor,
            },
            QualityThreshold {
                min_index: 70.0,
                level: QualityLevel::Good,
            },
        ]);
        assert!(matches!(
            config.validate(),
            Err(ScoringError::InvalidThresholds(_))
        ));
    }

    #[test]
    fn test_classification_bands() {
        let config = ScoringConfig::default();
        assert_eq!(config.classify(92.0), QualityLevel::Excellent);
        assert_eq!(config.classify(75.0), QualityLevel::Good);
        assert_eq!(config.classify(60.0), QualityLevel::Fair);
        assert_eq!(config.classify(45.0), QualityLevel::Poor);
        assert_eq!(config.classify(10.0), QualityLevel::Critical);
    }

    #[test]
    fn test_boundary_resolves_to_higher_level() {
        let config = ScoringConfig::default();
        assert_eq!(config.classify(85.0), QualityLevel::Excellent);
        assert_eq!(config.classify(70.0), QualityLevel::Good);
        assert_eq!(config.classify(55.0), QualityLevel::Fair);
        assert_eq!(config.classify(40.0), QualityLevel::Poor);
    }

    #[test]
    fn test_quality_levels_are_ordered() {
        assert!(QualityLevel::Excellent > QualityLevel::Good);
        assert!(QualityLevel::Good > QualityLevel::Fair);
        assert!(QualityLevel::Fair > QualityLevel::Poor);
        assert!(QualityLevel::Poor > QualityLevel::Critical);
    }

    #[test]
    fn test_config_serializes_as_snapshot() {
        let config = ScoringConfig::default();
        let json = serde_json::to_value(&config).unwrap();
        assert!(json["weights"]["complexity"].is_number());
        assert_eq!(json["thresholds"][0]["level"], "excellent");
    }
}
