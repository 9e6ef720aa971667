//! Agent vocabulary: identity, invocation outcomes, durable results.

use serde::{Deserialize, Serialize};

/// A named analysis agent and its position in the dispatch order.
///
/// The name doubles as the dispatch key into the registry and the
/// report key in the final [`crate::PipelineReport`]; it must be
/// unique within one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentIdentity {
    pub name: String,
    pub position: usize,
}

impl AgentIdentity {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

impl std::fmt::Display for AgentIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.name, self.position)
    }
}

/// Tagged result of one agent invocation at the runtime boundary.
///
/// The empty/error distinction is an explicit tag rather than
/// something inferred from catch blocks, so the retry loop dispatches
/// on data, not on error-type sniffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvocationOutcome {
    /// The agent produced textual content.
    Success { text: String },

    /// The agent completed without raising but produced nothing usable.
    Empty,

    /// The agent's internal process failed.
    Error { message: String },
}

impl InvocationOutcome {
    /// Success with content that is actually non-blank.
    ///
    /// A backend may hand back `Success` wrapping whitespace; the
    /// execution unit treats that the same as [`InvocationOutcome::Empty`].
    pub fn is_usable(&self) -> bool {
        matches!(self, InvocationOutcome::Success { text } if !text.trim().is_empty())
    }
}

/// Final status of one agent after its full retry cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    /// The agent returned usable content.
    Completed,

    /// Every attempt came back empty; retries exhausted.
    Incomplete,

    /// The final attempt errored; retries exhausted.
    Failed,
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AgentStatus::Completed => "completed",
            AgentStatus::Incomplete => "incomplete",
            AgentStatus::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// The durable result of running one agent through all its attempts.
///
/// Owned by the pipeline report; never mutated after creation. Every
/// outcome carries human-readable response text — a synthesized
/// message for the incomplete/failed cases, never a bare null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentOutcome {
    /// Agent name (report key).
    pub agent: String,

    /// Final status after the retry cycle.
    pub status: AgentStatus,

    /// Agent response, or a synthesized incomplete/failed message.
    pub response: String,

    /// Number of invocation attempts consumed.
    pub attempts: u32,

    /// Wall-clock duration of the full retry cycle in milliseconds.
    pub duration_ms: u64,
}

impl AgentOutcome {
    /// Whether this agent produced usable analysis output.
    pub fn succeeded(&self) -> bool {
        self.status == AgentStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_outcome_usability() {
        let ok = InvocationOutcome::Success {
            text: "finding: ok".to_string(),
        };
        assert!(ok.is_usable());

        let blank = InvocationOutcome::Success {
            text: "   \n".to_string(),
        };
        assert!(!blank.is_usable());

        assert!(!InvocationOutcome::Empty.is_usable());
        assert!(!InvocationOutcome::Error {
            message: "boom".to_string()
        }
        .is_usable());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&AgentStatus::Incomplete).unwrap();
        assert_eq!(json, "\"incomplete\"");
    }

    #[test]
    fn test_identity_display() {
        let id = AgentIdentity::new("security", 0);
        assert_eq!(id.to_string(), "security#0");
    }
}
