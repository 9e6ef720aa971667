//! Built-in heuristic review agents.
//!
//! Four analyzers — security, complexity, maintainability,
//! architecture — implement the pipeline's invocation boundary so a
//! review run works end to end without an external agent runtime.
//! They stand exactly where a remote runtime would plug in; swapping
//! one out means registering a different [`ReviewAgent`] under the
//! same name.

pub mod architecture;
pub mod complexity;
pub mod maintainability;
pub mod security;

pub use architecture::ArchitectureAgent;
pub use complexity::ComplexityAgent;
pub use maintainability::MaintainabilityAgent;
pub use security::SecurityAgent;

use std::sync::Arc;

use reva_core::{AgentRegistry, Result};

/// Registry with every built-in agent, in canonical dispatch order:
/// security, complexity, maintainability, architecture.
pub fn builtin_registry() -> Result<AgentRegistry> {
    let mut registry = AgentRegistry::new();
    registry.register(Arc::new(SecurityAgent::default()))?;
    registry.register(Arc::new(ComplexityAgent::default()))?;
    registry.register(Arc::new(MaintainabilityAgent::default()))?;
    registry.register(Arc::new(ArchitectureAgent::default()))?;
    Ok(registry)
}
