//! Maintainability review agent backed by the scoring engine.

use async_trait::async_trait;

use reva_core::{CodeSubmission, InvocationOutcome, ReviewAgent};

use crate::config::ScoringConfig;
use crate::engine::{ScoringEngine, SourceFile};

/// Scores the submission with the maintainability engine and renders
/// index, level, sub-scores, and recommendations as the finding text.
#[derive(Default)]
pub struct MaintainabilityAgent {
    engine: ScoringEngine,
    config: ScoringConfig,
}

impl MaintainabilityAgent {
    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            engine: ScoringEngine::default(),
            config,
        }
    }
}

#[async_trait]
impl ReviewAgent for MaintainabilityAgent {
    fn name(&self) -> &str {
        "maintainability"
    }

    async fn invoke(&self, submission: &CodeSubmission) -> InvocationOutcome {
        let path = submission.path.clone().unwrap_or_else(|| "submission".to_string());
        let file = SourceFile::new(path, submission.content.clone());

        // A broken configuration is a hard failure at this boundary —
        // the retry loop will surface it rather than invent a score.
        let score = match self.engine.score(&[file], &self.config) {
            Ok(score) => score,
            Err(e) => {
                return InvocationOutcome::Error {
                    message: e.to_string(),
                }
            }
        };

        let mut lines = vec![
            format!("maintainability index: {:.1} ({})", score.index, score.level),
            format!("language: {}", score.language),
        ];
        for (metric, sub) in &score.sub_scores {
            lines.push(format!("  {metric}: {sub:.1}"));
        }
        if !score.recommendations.is_empty() {
            lines.push("recommendations:".to_string());
            for rec in &score.recommendations {
                lines.push(format!("  - {rec}"));
            }
        }

        InvocationOutcome::Success {
            text: lines.join("\n"),
        }
    }
}
