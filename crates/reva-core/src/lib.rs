//! reva Core Library
//!
//! Domain types and orchestration for the multi-agent code-review
//! pipeline: a sequential executor that runs named analysis agents
//! against one code submission, retrying transient failures with
//! exponential backoff and aggregating every agent's outcome into a
//! single report.

pub mod digest;
pub mod domain;
pub mod execution;
pub mod metrics;
pub mod pipeline;
pub mod registry;
pub mod reporting;
pub mod telemetry;

pub use digest::ContentDigest;

pub use domain::{
    AgentIdentity, AgentOutcome, AgentStatus, CodeSubmission, InvocationOutcome, PipelineReport,
    Result, RevaError,
};

pub use execution::{run_agent, RetryPolicy};
pub use pipeline::Pipeline;
pub use registry::{AgentRegistry, ReviewAgent};
pub use reporting::{render_report_md, write_report_json};

pub use metrics::METRICS;
pub use telemetry::init_tracing;

/// reva version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
