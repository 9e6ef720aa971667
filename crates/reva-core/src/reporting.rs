//! Report artifacts for API and PR-comment consumers.
//!
//! A pipeline report serializes two ways:
//! - `report.json` — machine-readable artifact for the HTTP layer
//! - Markdown summary — human-readable rendering for comments/checks

use std::path::Path;

use crate::domain::{PipelineReport, Result};

/// Write a pretty-JSON report artifact.
pub fn write_report_json(path: &Path, report: &PipelineReport) -> Result<()> {
    let content = serde_json::to_string_pretty(report)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Render a Markdown summary of a pipeline run.
pub fn render_report_md(report: &PipelineReport) -> String {
    let mut out = String::new();
    out.push_str("# Review Report\n\n");
    out.push_str(&format!(
        "- run: `{}`\n- submission: `{}`\n- duration: {} ms\n",
        report.run_id,
        &report.submission_digest[..12.min(report.submission_digest.len())],
        report.duration_ms
    ));
    out.push_str(&format!(
        "- agents: {} completed, {} incomplete, {} failed\n\n",
        report.completed_count(),
        report.incomplete_count(),
        report.failed_count()
    ));

    for outcome in &report.outcomes {
        out.push_str(&format!(
            "## {} — {}\n\n",
            outcome.agent, outcome.status
        ));
        out.push_str(&format!(
            "attempts: {} ({} ms)\n\n",
            outcome.attempts, outcome.duration_ms
        ));
        out.push_str(&outcome.response);
        out.push_str("\n\n");
    }

    out
}
