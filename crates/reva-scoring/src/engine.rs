//! The maintainability scoring engine.
//!
//! One call walks `collect → aggregate → normalize → weight →
//! classify → recommend` and returns an immutable
//! [`MaintainabilityScore`]. The engine holds no cross-call state and
//! is safe to invoke concurrently for independent calls.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use reva_core::METRICS;

use crate::config::{QualityLevel, ScoringConfig};
use crate::error::Result;
use crate::language::{ExtensionDetector, LanguageDetector};
use crate::metric::{Aggregation, MetricKind};
use crate::providers::{HeuristicProvider, MetricProvider};

/// One file handed to the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Composite result of one scoring invocation. Never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintainabilityScore {
    /// Weighted composite maintainability index, 0–100.
    pub index: f64,

    /// Quality level the index maps to.
    pub level: QualityLevel,

    /// Normalized 0–100 sub-score per metric name.
    pub sub_scores: BTreeMap<String, f64>,

    /// Primary detected language (most files; first-seen tie-break).
    pub language: String,

    /// Templated recommendations in metric declaration order.
    pub recommendations: Vec<String>,

    /// Number of files analyzed.
    pub files_analyzed: usize,

    /// Wall-clock duration of the scoring call in milliseconds.
    pub duration_ms: u64,

    /// When the score was computed.
    pub evaluated_at: DateTime<Utc>,

    /// Snapshot of the configuration the score was computed against.
    pub config: ScoringConfig,
}

/// Scoring engine with pluggable language detection and metric
/// collection.
pub struct ScoringEngine {
    detector: Arc<dyn LanguageDetector>,
    provider: Arc<dyn MetricProvider>,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self {
            detector: Arc::new(ExtensionDetector),
            provider: Arc::new(HeuristicProvider::default()),
        }
    }
}

impl ScoringEngine {
    pub fn new(detector: Arc<dyn LanguageDetector>, provider: Arc<dyn MetricProvider>) -> Self {
        Self { detector, provider }
    }

    /// Score a set of files against `config`.
    ///
    /// Fails only on an invalid configuration, before any metric is
    /// collected. An empty file list is not an error: the sentinel
    /// score has index 0.0, zero files analyzed, and a single
    /// "no files" recommendation.
    pub fn score(
        &self,
        files: &[SourceFile],
        config: &ScoringConfig,
    ) -> Result<MaintainabilityScore> {
        config.validate()?;
        let start = Instant::now();

        if files.is_empty() {
            METRICS.inc_scores_computed();
            return Ok(MaintainabilityScore {
                index: 0.0,
                level: config.classify(0.0),
                sub_scores: BTreeMap::new(),
                language: "unknown".to_string(),
                recommendations: vec!["No files analyzed".to_string()],
                files_analyzed: 0,
                duration_ms: start.elapsed().as_millis() as u64,
                evaluated_at: Utc::now(),
                config: config.clone(),
            });
        }

        // Collect per-file metrics and tally languages in first-seen
        // order for the tie-break.
        let mut metric_sets = Vec::with_capacity(files.len());
        let mut language_counts: Vec<(String, usize)> = Vec::new();

        for file in files {
            let detection = self.detector.detect(Some(&file.path), &file.content);
            debug!(path = %file.path, language = %detection.language, "collecting metrics");

            match language_counts
                .iter_mut()
                .find(|(lang, _)| *lang == detection.language)
            {
                Some((_, count)) => *count += 1,
                None => language_counts.push((detection.language.clone(), 1)),
            }

            metric_sets.push(self.provider.collect(&file.content, &detection.language));
        }

        // Aggregate, normalize, and weight each metric in declaration
        // order.
        let mut sub_scores = BTreeMap::new();
        let mut index = 0.0;
        let mut recommendations = Vec::new();

        for kind in MetricKind::ALL {
            let values: Vec<f64> = metric_sets.iter().filter_map(|s| s.get(kind)).collect();
            if values.is_empty() {
                continue;
            }

            let raw = match kind.aggregation() {
                Aggregation::Mean => values.iter().sum::<f64>() / values.len() as f64,
                Aggregation::Max => values.iter().copied().fold(f64::MIN, f64::max),
            };

            let sub = kind.normalize(raw, &config.normalization);
            index += config.weight(kind) * sub;

            if sub < config.warning_band {
                recommendations.push(kind.recommendation().to_string());
            }

            sub_scores.insert(kind.name().to_string(), sub);
        }

        // Strictly-greater comparison so a tie keeps the first-seen
        // language (max_by_key would keep the last).
        let mut language = "unknown".to_string();
        let mut best = 0usize;
        for (lang, count) in &language_counts {
            if *count > best {
                best = *count;
                language = lang.clone();
            }
        }

        let score = MaintainabilityScore {
            index,
            level: config.classify(index),
            sub_scores,
            language,
            recommendations,
            files_analyzed: files.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            evaluated_at: Utc::now(),
            config: config.clone(),
        };

        METRICS.inc_scores_computed();
        debug!(
            index = score.index,
            level = %score.level,
            files = score.files_analyzed,
            "maintainability score computed"
        );

        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoringError;
    use std::collections::HashMap;

    fn engine() -> ScoringEngine {
        ScoringEngine::default()
    }

    #[test]
    fn test_empty_file_list_returns_sentinel() {
        let score = engine().score(&[], &ScoringConfig::default()).unwrap();
        assert_eq!(score.index, 0.0);
        assert_eq!(score.files_analyzed, 0);
        assert_eq!(score.language, "unknown");
        assert_eq!(score.recommendations, vec!["No files analyzed".to_string()]);
    }

    #[test]
    fn test_invalid_weights_rejected_before_scoring() {
        let mut weights = HashMap::new();
        weights.insert(MetricKind::Complexity, 0.7);
        weights.insert(MetricKind::Duplication, 0.6);
        let config = ScoringConfig::default().with_weights(weights);

        let result = engine().score(&[SourceFile::new("a.rs", "fn main() {}")], &config);
        assert!(matches!(result, Err(ScoringError::InvalidWeights { .. })));
    }

    #[test]
    fn test_score_covers_all_metrics() {
        let score = engine()
            .score(
                &[SourceFile::new("a.rs", "// doc\nfn main() { let x = 1; }")],
                &ScoringConfig::default(),
            )
            .unwrap();

        for kind in MetricKind::ALL {
            assert!(score.sub_scores.contains_key(kind.name()), "missing {kind}");
        }
        assert!(score.index >= 0.0 && score.index <= 100.0);
        assert_eq!(score.files_analyzed, 1);
    }

    #[test]
    fn test_worst_offender_metrics_use_max() {
        // One shallow file and one deeply nested file: nesting must
        // reflect the worst file, not the average.
        let shallow = SourceFile::new("shallow.rs", "fn f() { g(); }");
        let nested = SourceFile::new(
            "nested.rs",
            "fn f() { if a { if b { if c { if d { if e { } } } } } }",
        );

        let both = engine()
            .score(&[shallow.clone(), nested.clone()], &ScoringConfig::default())
            .unwrap();
        let nested_only = engine()
            .score(&[nested], &ScoringConfig::default())
            .unwrap();

        assert_eq!(
            both.sub_scores["nesting_depth"],
            nested_only.sub_scores["nesting_depth"]
        );
    }

    #[test]
    fn test_primary_language_majority_with_first_seen_tie_break() {
        let files = vec![
            SourceFile::new("a.py", "def a():\n    pass"),
            SourceFile::new("b.rs", "fn b() {}"),
            SourceFile::new("c.py", "def c():\n    pass"),
        ];
        let score = engine().score(&files, &ScoringConfig::default()).unwrap();
        assert_eq!(score.language, "python");

        // 1-1 tie resolves to the first-seen language.
        let tied = vec![
            SourceFile::new("b.rs", "fn b() {}"),
            SourceFile::new("a.py", "def a():\n    pass"),
        ];
        let score = engine().score(&tied, &ScoringConfig::default()).unwrap();
        assert_eq!(score.language, "rust");
    }

    #[test]
    fn test_recommendations_follow_declaration_order() {
        // Undocumented, deeply nested, wide-signature code trips
        // several warning bands at once.
        let content = "fn f(a: u32, b: u32, c: u32, d: u32, e: u32, g: u32, h: u32, i: u32, j: u32, k: u32) { if a > 0 { if b > 0 { if c > 0 { if d > 0 { if e > 0 { } } } } } }";
        let score = engine()
            .score(&[SourceFile::new("wide.rs", content)], &ScoringConfig::default())
            .unwrap();

        assert!(score.recommendations.len() >= 2);
        // Declaration-order positions of the emitted recommendations
        // must be non-decreasing.
        let order: Vec<usize> = score
            .recommendations
            .iter()
            .map(|r| {
                MetricKind::ALL
                    .iter()
                    .position(|k| k.recommendation() == r)
                    .expect("recommendation from known metric")
            })
            .collect();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted);
    }

    #[test]
    fn test_sub_score_monotonicity_in_one_metric() {
        // Two single-file sets identical except for nesting depth.
        let flat = SourceFile::new("a.rs", "fn f() { g(); }");
        let deep = SourceFile::new("a.rs", "fn f() { if a { if b { if c { g(); } } } }");

        let config = ScoringConfig::default();
        let flat_score = engine().score(&[flat], &config).unwrap();
        let deep_score = engine().score(&[deep], &config).unwrap();

        assert!(
            flat_score.sub_scores["nesting_depth"] >= deep_score.sub_scores["nesting_depth"]
        );
    }

    #[test]
    fn test_config_snapshot_embedded_in_score() {
        let config = ScoringConfig::default();
        let score = engine()
            .score(&[SourceFile::new("a.rs", "fn main() {}")], &config)
            .unwrap();
        assert_eq!(score.config, config);
    }
}
