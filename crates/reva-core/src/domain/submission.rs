//! Code submission input model.

use serde::{Deserialize, Serialize};

use crate::digest::ContentDigest;

/// A code artifact handed to the pipeline for review.
///
/// Immutable once dispatched: agents receive a shared reference and
/// the orchestrator never rewrites content mid-run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSubmission {
    /// Opaque source text under review.
    pub content: String,

    /// Originating file path, if known.
    pub path: Option<String>,

    /// Language hint, if the caller already knows it.
    pub language: Option<String>,
}

impl CodeSubmission {
    /// Create a submission from bare source text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            path: None,
            language: None,
        }
    }

    /// Attach an originating path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach a language hint.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// SHA-256 digest of the submitted content.
    ///
    /// Ties a report to the exact bytes that were reviewed.
    pub fn digest(&self) -> ContentDigest {
        ContentDigest::from_bytes(self.content.as_bytes())
    }

    /// Number of lines in the submission.
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}
