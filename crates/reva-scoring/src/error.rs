//! Scoring error taxonomy.
//!
//! Configuration errors are never retried and never silently papered
//! over: a caller supplying broken weights must find out before any
//! index is computed. Degenerate input (empty file list) is not an
//! error — the engine returns a documented sentinel score instead.

/// Errors produced by scoring configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("metric weights must sum to 1.0 (got {sum:.4})")]
    InvalidWeights { sum: f64 },

    #[error("negative weight for metric {metric}: {weight}")]
    NegativeWeight { metric: String, weight: f64 },

    #[error("invalid quality thresholds: {0}")]
    InvalidThresholds(String),
}

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, ScoringError>;
