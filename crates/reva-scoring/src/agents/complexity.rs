//! Structural complexity review agent.

use async_trait::async_trait;

use reva_core::{CodeSubmission, InvocationOutcome, ReviewAgent};

use crate::config::Normalization;
use crate::language::{ExtensionDetector, LanguageDetector};
use crate::metric::MetricKind;
use crate::providers::{HeuristicProvider, MetricProvider};

/// Reports raw structural metrics (branch points, nesting, parameter
/// extremes) and calls out the ones over their configured ceilings.
#[derive(Default)]
pub struct ComplexityAgent {
    detector: ExtensionDetector,
    provider: HeuristicProvider,
    norms: Normalization,
}

#[async_trait]
impl ReviewAgent for ComplexityAgent {
    fn name(&self) -> &str {
        "complexity"
    }

    async fn invoke(&self, submission: &CodeSubmission) -> InvocationOutcome {
        let language = match &submission.language {
            Some(lang) => lang.clone(),
            None => {
                self.detector
                    .detect(submission.path.as_deref(), &submission.content)
                    .language
            }
        };

        let metrics = self.provider.collect(&submission.content, &language);
        let complexity = metrics.get(MetricKind::Complexity).unwrap_or(0.0);
        let nesting = metrics.get(MetricKind::NestingDepth).unwrap_or(0.0);
        let params = metrics.get(MetricKind::ParameterCount).unwrap_or(0.0);

        let mut lines = vec![
            format!("language: {language}"),
            format!("branch points: {complexity:.0}"),
            format!("max nesting depth: {nesting:.0}"),
            format!("max parameter count: {params:.0}"),
        ];

        if complexity >= self.norms.max_complexity {
            lines.push(format!(
                "WARN: branch count {complexity:.0} exceeds ceiling {:.0}",
                self.norms.max_complexity
            ));
        }
        if nesting >= self.norms.max_nesting {
            lines.push(format!(
                "WARN: nesting depth {nesting:.0} exceeds ceiling {:.0}",
                self.norms.max_nesting
            ));
        }
        if params >= self.norms.max_parameters {
            lines.push(format!(
                "WARN: parameter count {params:.0} exceeds ceiling {:.0}",
                self.norms.max_parameters
            ));
        }

        InvocationOutcome::Success {
            text: lines.join("\n"),
        }
    }
}
