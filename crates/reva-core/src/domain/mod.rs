//! Domain model for review pipeline runs.

pub mod agent;
pub mod error;
pub mod report;
pub mod submission;

pub use agent::{AgentIdentity, AgentOutcome, AgentStatus, InvocationOutcome};
pub use error::{Result, RevaError};
pub use report::PipelineReport;
pub use submission::CodeSubmission;
