//! Structure/architecture review agent.

use async_trait::async_trait;
use regex::Regex;

use reva_core::{CodeSubmission, InvocationOutcome, ReviewAgent};

const MAX_FILE_LINES: usize = 400;
const MAX_TYPES_PER_FILE: usize = 8;

/// Heuristic file-structure review: size, type density, declared
/// functions, pending TODO/FIXME markers.
pub struct ArchitectureAgent {
    function_decl: Regex,
    type_decl: Regex,
    todo_marker: Regex,
}

impl Default for ArchitectureAgent {
    fn default() -> Self {
        Self {
            function_decl: Regex::new(r"(?m)^\s*(?:pub\s+)?(?:async\s+)?(?:fn|def|function)\s+\w+")
                .expect("static regex"),
            type_decl: Regex::new(r"(?m)^\s*(?:pub\s+)?(?:struct|enum|trait|class|interface)\s+\w+")
                .expect("static regex"),
            todo_marker: Regex::new(r"(?i)\b(todo|fixme|hack)\b").expect("static regex"),
        }
    }
}

#[async_trait]
impl ReviewAgent for ArchitectureAgent {
    fn name(&self) -> &str {
        "architecture"
    }

    async fn invoke(&self, submission: &CodeSubmission) -> InvocationOutcome {
        let lines = submission.line_count();
        let functions = self.function_decl.find_iter(&submission.content).count();
        let types = self.type_decl.find_iter(&submission.content).count();
        let todos = self.todo_marker.find_iter(&submission.content).count();

        let mut out = vec![
            format!("lines: {lines}"),
            format!("functions: {functions}"),
            format!("type declarations: {types}"),
        ];

        if lines > MAX_FILE_LINES {
            out.push(format!(
                "WARN: file has {lines} lines (consider splitting above {MAX_FILE_LINES})"
            ));
        }
        if types > MAX_TYPES_PER_FILE {
            out.push(format!(
                "WARN: {types} type declarations in one file suggests low cohesion"
            ));
        }
        if functions > 0 && lines / functions.max(1) > 60 {
            out.push("WARN: average function length exceeds 60 lines".to_string());
        }
        if todos > 0 {
            out.push(format!("NOTE: {todos} pending TODO/FIXME marker(s)"));
        }

        InvocationOutcome::Success {
            text: out.join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_declarations() {
        let agent = ArchitectureAgent::default();
        let submission = CodeSubmission::new(
            "pub struct A;\npub enum B { X }\nfn one() {}\nasync fn two() {}\n",
        );
        let outcome = agent.invoke(&submission).await;

        match outcome {
            InvocationOutcome::Success { text } => {
                assert!(text.contains("functions: 2"));
                assert!(text.contains("type declarations: 2"));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_flags_oversized_file() {
        let agent = ArchitectureAgent::default();
        let big = "let line = 1;\n".repeat(MAX_FILE_LINES + 1);
        let outcome = agent.invoke(&CodeSubmission::new(big)).await;

        match outcome {
            InvocationOutcome::Success { text } => {
                assert!(text.contains("consider splitting"));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_notes_pending_todos() {
        let agent = ArchitectureAgent::default();
        let outcome = agent
            .invoke(&CodeSubmission::new("fn f() {} // TODO: handle None"))
            .await;

        match outcome {
            InvocationOutcome::Success { text } => {
                assert!(text.contains("pending TODO/FIXME"));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }
}
