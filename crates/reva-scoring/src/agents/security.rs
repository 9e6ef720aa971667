//! Pattern-based security review agent.

use async_trait::async_trait;
use regex::Regex;

use reva_core::{CodeSubmission, InvocationOutcome, ReviewAgent};

struct SecurityPattern {
    regex: Regex,
    severity: &'static str,
    message: &'static str,
}

/// Flags common insecure patterns: hardcoded credentials, dynamic code
/// evaluation, shell execution, weak hashes, SQL built by string
/// concatenation.
pub struct SecurityAgent {
    patterns: Vec<SecurityPattern>,
}

impl Default for SecurityAgent {
    fn default() -> Self {
        let rules: [(&str, &str, &str); 5] = [
            (
                r#"(?i)(password|secret|api_key|token)\s*=\s*["'][^"']+["']"#,
                "high",
                "hardcoded credential",
            ),
            (
                r"\beval\s*\(|\bexec\s*\(",
                "high",
                "dynamic code evaluation",
            ),
            (
                r"os\.system\s*\(|subprocess\.|popen\s*\(",
                "medium",
                "shell command execution",
            ),
            (r"\b(md5|sha1)\s*\(", "medium", "weak hash algorithm"),
            (
                r#"(?i)(select|insert|update|delete)\b[^\n]*["']\s*\+"#,
                "high",
                "SQL built by string concatenation",
            ),
        ];

        Self {
            patterns: rules
                .into_iter()
                .map(|(pattern, severity, message)| SecurityPattern {
                    regex: Regex::new(pattern).expect("static regex"),
                    severity,
                    message,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl ReviewAgent for SecurityAgent {
    fn name(&self) -> &str {
        "security"
    }

    async fn invoke(&self, submission: &CodeSubmission) -> InvocationOutcome {
        let mut findings = Vec::new();

        for (line_no, line) in submission.content.lines().enumerate() {
            for pattern in &self.patterns {
                if pattern.regex.is_match(line) {
                    findings.push(format!(
                        "{}: {} (line {})",
                        pattern.severity.to_uppercase(),
                        pattern.message,
                        line_no + 1
                    ));
                }
            }
        }

        let text = if findings.is_empty() {
            "No security findings".to_string()
        } else {
            format!(
                "{} security finding(s):\n{}",
                findings.len(),
                findings.join("\n")
            )
        };

        InvocationOutcome::Success { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_flags_hardcoded_credentials() {
        let agent = SecurityAgent::default();
        let submission = CodeSubmission::new("let password = \"hunter2\";");
        let outcome = agent.invoke(&submission).await;

        match outcome {
            InvocationOutcome::Success { text } => {
                assert!(text.contains("HIGH"));
                assert!(text.contains("hardcoded credential"));
                assert!(text.contains("line 1"));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_flags_eval_and_weak_hash() {
        let agent = SecurityAgent::default();
        let submission = CodeSubmission::new("result = eval(user_input)\ndigest = md5(data)");
        let outcome = agent.invoke(&submission).await;

        match outcome {
            InvocationOutcome::Success { text } => {
                assert!(text.contains("dynamic code evaluation"));
                assert!(text.contains("weak hash algorithm"));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_clean_code_still_completes() {
        let agent = SecurityAgent::default();
        let submission = CodeSubmission::new("fn add(a: u32, b: u32) -> u32 { a + b }");
        let outcome = agent.invoke(&submission).await;

        // A clean result is still usable content, never an empty
        // response.
        assert!(outcome.is_usable());
        match outcome {
            InvocationOutcome::Success { text } => {
                assert_eq!(text, "No security findings");
            }
            other => panic!("expected success, got {other:?}"),
        }
    }
}
