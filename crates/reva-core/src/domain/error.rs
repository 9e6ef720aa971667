//! Domain-level error taxonomy for reva.

/// reva domain errors.
#[derive(Debug, thiserror::Error)]
pub enum RevaError {
    #[error("invalid retry policy: {0}")]
    InvalidRetryPolicy(String),

    #[error("agent not registered: {0}")]
    AgentNotRegistered(String),

    #[error("duplicate agent registration: {0}")]
    DuplicateAgent(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for reva domain operations.
pub type Result<T> = std::result::Result<T, RevaError>;
