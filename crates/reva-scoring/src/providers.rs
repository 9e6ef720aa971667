//! Metric providers: the pluggable source of raw per-file metrics.
//!
//! The engine only depends on the `metric → value` output contract; a
//! provider may be backed by real static analysis, AST inspection, or
//! the text heuristics shipped here. The complexity heuristic in
//! particular is a placeholder keyword count — swap in a proper
//! analyzer by implementing [`MetricProvider`].

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::metric::MetricKind;

/// Raw per-file metrics keyed by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileMetricSet {
    pub metrics: HashMap<MetricKind, f64>,
}

impl FileMetricSet {
    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        self.metrics.get(&kind).copied()
    }

    pub fn insert(&mut self, kind: MetricKind, value: f64) {
        self.metrics.insert(kind, value);
    }
}

/// Produces a [`FileMetricSet`] for given file content.
pub trait MetricProvider: Send + Sync {
    fn collect(&self, content: &str, language: &str) -> FileMetricSet;
}

/// Text-heuristic provider covering every [`MetricKind`].
#[derive(Debug, Clone)]
pub struct HeuristicProvider {
    fn_signature: Regex,
}

impl Default for HeuristicProvider {
    fn default() -> Self {
        Self {
            // fn/def/function name(params) across the supported languages.
            fn_signature: Regex::new(r"(?:fn|def|function)\s+\w+\s*\(([^)]*)\)")
                .expect("static regex"),
        }
    }
}

const BRANCH_KEYWORDS: [&str; 10] = [
    "if ", "else", "for ", "while ", "match ", "switch", "case ", "&&", "||", "catch",
];

impl HeuristicProvider {
    /// Branch-point keyword count. Unvalidated placeholder for real
    /// cyclomatic complexity; kept behind the provider seam so it can
    /// be replaced without touching the engine.
    fn complexity(content: &str) -> f64 {
        let mut count = 0usize;
        for line in content.lines() {
            let trimmed = line.trim_start();
            // Comment lines carry no control flow.
            if trimmed.starts_with("//") || trimmed.starts_with('#') || trimmed.starts_with('*') {
                continue;
            }
            for keyword in BRANCH_KEYWORDS {
                count += trimmed.matches(keyword).count();
            }
        }
        count as f64
    }

    /// Fraction of substantial lines that appear more than once.
    fn duplication(content: &str) -> f64 {
        let lines: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|l| l.len() > 10)
            .collect();
        if lines.is_empty() {
            return 0.0;
        }

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for line in &lines {
            *seen.entry(line).or_insert(0) += 1;
        }
        let duplicated: usize = seen.values().filter(|&&c| c > 1).map(|c| c - 1).sum();
        duplicated as f64 / lines.len() as f64
    }

    /// Comment lines over non-blank lines.
    fn documentation(content: &str) -> f64 {
        let mut comments = 0usize;
        let mut non_blank = 0usize;
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            non_blank += 1;
            if trimmed.starts_with("//")
                || trimmed.starts_with('#')
                || trimmed.starts_with("/*")
                || trimmed.starts_with('*')
                || trimmed.starts_with("\"\"\"")
            {
                comments += 1;
            }
        }
        if non_blank == 0 {
            0.0
        } else {
            comments as f64 / non_blank as f64
        }
    }

    /// Largest parameter list across fn-like signatures.
    fn max_parameters(&self, content: &str) -> f64 {
        self.fn_signature
            .captures_iter(content)
            .map(|cap| {
                let params = cap[1].trim();
                if params.is_empty() {
                    0
                } else {
                    params.matches(',').count() + 1
                }
            })
            .max()
            .unwrap_or(0) as f64
    }

    /// Deepest block nesting, from braces or (for offside-rule
    /// languages) indentation.
    fn max_nesting(content: &str, language: &str) -> f64 {
        if language == "python" {
            let max_indent = content
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(|l| l.len() - l.trim_start().len())
                .max()
                .unwrap_or(0);
            return (max_indent / 4) as f64;
        }

        let mut depth = 0i64;
        let mut max_depth = 0i64;
        for line in content.lines() {
            let trimmed = line.trim_start();
            // Comment lines carry no block structure.
            if trimmed.starts_with("//") || trimmed.starts_with('#') || trimmed.starts_with('*') {
                continue;
            }
            for ch in trimmed.chars() {
                match ch {
                    '{' => {
                        depth += 1;
                        max_depth = max_depth.max(depth);
                    }
                    '}' => depth -= 1,
                    _ => {}
                }
            }
        }
        max_depth.max(0) as f64
    }
}

impl MetricProvider for HeuristicProvider {
    fn collect(&self, content: &str, language: &str) -> FileMetricSet {
        let mut set = FileMetricSet::default();
        set.insert(MetricKind::Complexity, Self::complexity(content));
        set.insert(MetricKind::Duplication, Self::duplication(content));
        set.insert(MetricKind::Documentation, Self::documentation(content));
        set.insert(MetricKind::ParameterCount, self.max_parameters(content));
        set.insert(MetricKind::NestingDepth, Self::max_nesting(content, language));
        set
    }
}
