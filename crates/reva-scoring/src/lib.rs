//! reva Scoring Library
//!
//! Maintainability scoring engine: aggregates heterogeneous per-file
//! metrics into one composite 0–100 index with a quality-level label
//! and templated recommendations. Also ships the built-in heuristic
//! review agents that plug into the `reva-core` pipeline.

pub mod agents;
pub mod config;
pub mod engine;
pub mod error;
pub mod language;
pub mod metric;
pub mod providers;

pub use agents::{
    builtin_registry, ArchitectureAgent, ComplexityAgent, MaintainabilityAgent, SecurityAgent,
};
pub use config::{Normalization, QualityLevel, QualityThreshold, ScoringConfig};
pub use engine::{MaintainabilityScore, ScoringEngine, SourceFile};
pub use error::{Result, ScoringError};
pub use language::{Detection, ExtensionDetector, LanguageDetector};
pub use metric::{Aggregation, MetricKind};
pub use providers::{FileMetricSet, HeuristicProvider, MetricProvider};
