//! Agent execution unit: bounded retry with exponential backoff.
//!
//! Runs one agent against one submission, retrying soft failures
//! (empty responses) and hard failures (invocation errors) up to the
//! policy's attempt bound. Every code path terminates in a
//! `completed`/`incomplete`/`failed` [`AgentOutcome`]; nothing
//! propagates past this boundary.
//!
//! No per-attempt wall-clock timeout is imposed — the attempt bound is
//! the only limit. Callers needing one can wrap the pipeline call in
//! `tokio::time::timeout`.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::domain::{
    AgentOutcome, AgentStatus, CodeSubmission, InvocationOutcome, Result, RevaError,
};
use crate::metrics::METRICS;
use crate::registry::ReviewAgent;

/// Bounded retry policy for one agent's invocation cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum invocation attempts per agent (>= 1).
    pub max_retries: u32,

    /// Delay before the first retry; doubles on each subsequent one.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// Backoff delay after the given 0-based attempt: `base * 2^attempt`
    /// (1s, 2s, 4s, … with the default base).
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }

    /// Reject policies that could never attempt an invocation.
    pub fn validate(&self) -> Result<()> {
        if self.max_retries == 0 {
            return Err(RevaError::InvalidRetryPolicy(
                "max_retries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Run one agent through its full retry cycle.
///
/// - A non-blank `Success` stops immediately with `completed`.
/// - `Empty` (or blank `Success`) is a retryable soft failure; if all
///   attempts come up empty the outcome is `incomplete`.
/// - `Error` is a retryable hard failure; if the final attempt errors
///   the outcome is `failed`, carrying the last error's message.
///
/// The status reflects the final attempt's failure mode: an agent that
/// alternates empty and error responses is classified by whatever its
/// last attempt did.
pub async fn run_agent(
    agent: &dyn ReviewAgent,
    submission: &CodeSubmission,
    policy: &RetryPolicy,
) -> AgentOutcome {
    let start = Instant::now();
    let name = agent.name().to_string();
    let max_attempts = policy.max_retries.max(1);
    let mut last_error: Option<String> = None;

    for attempt in 0..max_attempts {
        debug!(agent = %name, attempt, "invoking agent");

        match agent.invoke(submission).await {
            InvocationOutcome::Success { text } if !text.trim().is_empty() => {
                let attempts = attempt + 1;
                info!(agent = %name, attempts, "agent completed");
                METRICS.inc_agents_executed();
                return AgentOutcome {
                    agent: name,
                    status: AgentStatus::Completed,
                    response: text,
                    attempts,
                    duration_ms: start.elapsed().as_millis() as u64,
                };
            }
            InvocationOutcome::Success { .. } | InvocationOutcome::Empty => {
                warn!(agent = %name, attempt, "agent returned empty response");
                last_error = None;
            }
            InvocationOutcome::Error { message } => {
                warn!(agent = %name, attempt, error = %message, "agent invocation failed");
                last_error = Some(message);
            }
        }

        // Back off only if attempts remain.
        if attempt + 1 < max_attempts {
            let delay = policy.backoff_delay(attempt);
            debug!(
                agent = %name,
                attempt,
                delay_secs = delay.as_secs_f64(),
                "backing off before retry"
            );
            METRICS.inc_retries_performed();
            tokio::time::sleep(delay).await;
        }
    }

    METRICS.inc_agents_executed();
    let duration_ms = start.elapsed().as_millis() as u64;

    match last_error {
        Some(error) => {
            warn!(agent = %name, attempts = max_attempts, error = %error, "agent failed");
            AgentOutcome {
                response: format!(
                    "Agent '{name}' failed after {max_attempts} attempts: {error}"
                ),
                agent: name,
                status: AgentStatus::Failed,
                attempts: max_attempts,
                duration_ms,
            }
        }
        None => {
            warn!(agent = %name, attempts = max_attempts, "agent produced no response");
            AgentOutcome {
                response: format!(
                    "Agent '{name}' produced no response after {max_attempts} attempts"
                ),
                agent: name,
                status: AgentStatus::Incomplete,
                attempts: max_attempts,
                duration_ms,
            }
        }
    }
}
