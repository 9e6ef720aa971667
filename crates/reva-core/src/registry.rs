//! Agent capability seam and explicit registry.
//!
//! The registry is a plain value built during setup and passed by
//! reference into the orchestrator — no ambient/global state. Runtime
//! tool discovery is replaced by explicit registration.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{CodeSubmission, InvocationOutcome, Result, RevaError};

/// The capability interface every analysis agent implements.
///
/// This is the seam to the external agent runtime: given a submission,
/// an agent performs an unspecified internal process and hands back a
/// tagged [`InvocationOutcome`]. Implementations must not panic; any
/// internal failure is reported as [`InvocationOutcome::Error`].
#[async_trait]
pub trait ReviewAgent: Send + Sync {
    /// Stable agent name, unique within a registry.
    fn name(&self) -> &str;

    /// Run one analysis pass over the submission.
    async fn invoke(&self, submission: &CodeSubmission) -> InvocationOutcome;
}

/// Explicitly constructed name → agent mapping.
///
/// Registration order is preserved so `names()` doubles as a default
/// dispatch order.
#[derive(Default, Clone)]
pub struct AgentRegistry {
    agents: HashMap<String, Arc<dyn ReviewAgent>>,
    order: Vec<String>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent under its own name.
    ///
    /// Returns [`RevaError::DuplicateAgent`] if the name is taken.
    pub fn register(&mut self, agent: Arc<dyn ReviewAgent>) -> Result<()> {
        let name = agent.name().to_string();
        if self.agents.contains_key(&name) {
            return Err(RevaError::DuplicateAgent(name));
        }
        self.order.push(name.clone());
        self.agents.insert(name, agent);
        Ok(())
    }

    /// Look up an agent by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ReviewAgent>> {
        self.agents.get(name)
    }

    /// Registered agent names, in registration order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl std::fmt::Debug for AgentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRegistry")
            .field("agents", &self.order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoAgent {
        name: &'static str,
    }

    #[async_trait]
    impl ReviewAgent for EchoAgent {
        fn name(&self) -> &str {
            self.name
        }

        async fn invoke(&self, submission: &CodeSubmission) -> InvocationOutcome {
            InvocationOutcome::Success {
                text: submission.content.clone(),
            }
        }
    }

    #[test]
    fn test_register_preserves_order() {
        let mut registry = AgentRegistry::new();
        registry.register(Arc::new(EchoAgent { name: "b" })).unwrap();
        registry.register(Arc::new(EchoAgent { name: "a" })).unwrap();

        assert_eq!(registry.names(), &["b".to_string(), "a".to_string()]);
        assert_eq!(registry.len(), 2);
        assert!(registry.get("a").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = AgentRegistry::new();
        registry.register(Arc::new(EchoAgent { name: "a" })).unwrap();
        let err = registry.register(Arc::new(EchoAgent { name: "a" }));
        assert!(matches!(err, Err(RevaError::DuplicateAgent(_))));
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_registered_agent_invokes() {
        let mut registry = AgentRegistry::new();
        registry
            .register(Arc::new(EchoAgent { name: "echo" }))
            .unwrap();

        let submission = CodeSubmission::new("hello");
        let agent = registry.get("echo").unwrap();
        let outcome = agent.invoke(&submission).await;
        assert_eq!(
            outcome,
            InvocationOutcome::Success {
                text: "hello".to_string()
            }
        );
    }
}
