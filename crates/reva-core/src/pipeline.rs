//! Sequential pipeline orchestration.
//!
//! Dispatches agents strictly in the given order: one agent's complete
//! retry cycle finishes before the next agent starts. Later agents may
//! depend contextually on earlier agents' findings, so this layer does
//! not attempt parallel execution. A failing agent never prevents the
//! rest of the pipeline from running.

use tokio::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    AgentIdentity, AgentOutcome, AgentStatus, CodeSubmission, PipelineReport, Result,
};
use crate::execution::{run_agent, RetryPolicy};
use crate::metrics::METRICS;
use crate::registry::AgentRegistry;

/// Sequential review pipeline orchestrator.
pub struct Pipeline;

impl Pipeline {
    /// Run every agent in `agents` against `submission`, in order.
    ///
    /// The returned report always has exactly one slot per dispatched
    /// agent, in dispatch order, regardless of individual failures.
    /// An agent name missing from the registry fills its slot with a
    /// `failed` outcome rather than aborting the run.
    ///
    /// Errors only on an invalid retry policy, before any dispatch.
    pub async fn run(
        registry: &AgentRegistry,
        agents: &[AgentIdentity],
        submission: &CodeSubmission,
        policy: &RetryPolicy,
    ) -> Result<PipelineReport> {
        policy.validate()?;

        let start = Instant::now();
        let started_at = chrono::Utc::now();
        let run_id = Uuid::new_v4().to_string();
        let digest = submission.digest();

        info!(
            run_id = %run_id,
            submission = %digest.short(),
            agents = agents.len(),
            "starting review pipeline"
        );

        let mut outcomes = Vec::with_capacity(agents.len());

        for identity in agents {
            info!(run_id = %run_id, agent = %identity, "dispatching agent");

            let outcome = match registry.get(&identity.name) {
                Some(agent) => run_agent(agent.as_ref(), submission, policy).await,
                None => {
                    // The agent keeps its report slot even when it was
                    // never registered.
                    warn!(run_id = %run_id, agent = %identity, "agent not registered");
                    AgentOutcome {
                        agent: identity.name.clone(),
                        status: AgentStatus::Failed,
                        response: format!("Agent '{}' is not registered", identity.name),
                        attempts: 0,
                        duration_ms: 0,
                    }
                }
            };

            info!(
                run_id = %run_id,
                agent = %identity,
                status = %outcome.status,
                attempts = outcome.attempts,
                "agent finished"
            );

            outcomes.push(outcome);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        let report = PipelineReport {
            run_id: run_id.clone(),
            submission_digest: digest.to_string(),
            outcomes,
            started_at,
            duration_ms,
        };

        METRICS.inc_pipeline_runs();
        info!(
            run_id = %run_id,
            completed = report.completed_count(),
            incomplete = report.incomplete_count(),
            failed = report.failed_count(),
            duration_ms,
            "review pipeline finished"
        );

        Ok(report)
    }
}
