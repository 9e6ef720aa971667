//! Pipeline report: the aggregated result of one review run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::agent::{AgentOutcome, AgentStatus};

/// Ordered aggregation of every agent's outcome for one submission.
///
/// Invariant: `outcomes.len()` equals the number of agents dispatched,
/// in dispatch order — the pipeline never drops an agent's slot, no
/// matter how many agents fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Unique id for this pipeline run.
    pub run_id: String,

    /// SHA-256 digest of the reviewed content.
    pub submission_digest: String,

    /// Per-agent outcomes in dispatch order.
    pub outcomes: Vec<AgentOutcome>,

    /// When the run started.
    pub started_at: DateTime<Utc>,

    /// Total wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl PipelineReport {
    /// Number of agents that completed with usable output.
    pub fn completed_count(&self) -> usize {
        self.count(AgentStatus::Completed)
    }

    /// Number of agents that exhausted retries on empty responses.
    pub fn incomplete_count(&self) -> usize {
        self.count(AgentStatus::Incomplete)
    }

    /// Number of agents whose final attempt errored.
    pub fn failed_count(&self) -> usize {
        self.count(AgentStatus::Failed)
    }

    /// Whether every agent completed.
    pub fn all_completed(&self) -> bool {
        self.outcomes.iter().all(AgentOutcome::succeeded)
    }

    fn count(&self, status: AgentStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(agent: &str, status: AgentStatus) -> AgentOutcome {
        AgentOutcome {
            agent: agent.to_string(),
            status,
            response: "r".to_string(),
            attempts: 1,
            duration_ms: 10,
        }
    }

    fn report(outcomes: Vec<AgentOutcome>) -> PipelineReport {
        PipelineReport {
            run_id: "run123".to_string(),
            submission_digest: "abc".to_string(),
            outcomes,
            started_at: Utc::now(),
            duration_ms: 42,
        }
    }

    #[test]
    fn test_report_counts() {
        let r = report(vec![
            outcome("security", AgentStatus::Completed),
            outcome("complexity", AgentStatus::Failed),
            outcome("architecture", AgentStatus::Incomplete),
        ]);

        assert_eq!(r.completed_count(), 1);
        assert_eq!(r.failed_count(), 1);
        assert_eq!(r.incomplete_count(), 1);
        assert!(!r.all_completed());
    }

    #[test]
    fn test_all_completed() {
        let r = report(vec![
            outcome("security", AgentStatus::Completed),
            outcome("complexity", AgentStatus::Completed),
        ]);
        assert!(r.all_completed());
    }
}
