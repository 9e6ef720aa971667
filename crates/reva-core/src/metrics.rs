//! Global atomic counters for reva observability.
//!
//! Counters are incremented silently at the call site. Call
//! [`Metrics::flush`] to emit current values as a single
//! `tracing::info!` event (e.g. at the end of a run).

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

/// Lightweight atomic counters — no allocations, no locking.
pub struct Metrics {
    agents_executed: AtomicU64,
    retries_performed: AtomicU64,
    pipeline_runs: AtomicU64,
    scores_computed: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            agents_executed: AtomicU64::new(0),
            retries_performed: AtomicU64::new(0),
            pipeline_runs: AtomicU64::new(0),
            scores_computed: AtomicU64::new(0),
        }
    }

    /// Increment the agents-executed counter by one.
    pub fn inc_agents_executed(&self) {
        self.agents_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the retries-performed counter by one.
    pub fn inc_retries_performed(&self) {
        self.retries_performed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the pipeline-runs counter by one.
    pub fn inc_pipeline_runs(&self) {
        self.pipeline_runs.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the scores-computed counter by one.
    pub fn inc_scores_computed(&self) {
        self.scores_computed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn agents_executed(&self) -> u64 {
        self.agents_executed.load(Ordering::Relaxed)
    }

    pub fn retries_performed(&self) -> u64 {
        self.retries_performed.load(Ordering::Relaxed)
    }

    pub fn pipeline_runs(&self) -> u64 {
        self.pipeline_runs.load(Ordering::Relaxed)
    }

    pub fn scores_computed(&self) -> u64 {
        self.scores_computed.load(Ordering::Relaxed)
    }

    /// Emit all current counter values as a single `info!` event.
    ///
    /// Call this at natural boundaries (end of a run, process exit)
    /// rather than on every increment.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            agents_executed = self.agents_executed(),
            retries_performed = self.retries_performed(),
            pipeline_runs = self.pipeline_runs(),
            scores_computed = self.scores_computed(),
            "metrics snapshot"
        );
    }
}
