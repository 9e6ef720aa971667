//! Language detection seam.

use serde::{Deserialize, Serialize};

/// Detected language plus a rough confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub language: String,
    pub confidence: f32,
}

impl Detection {
    pub fn unknown() -> Self {
        Self {
            language: "unknown".to_string(),
            confidence: 0.0,
        }
    }
}

/// Given content and/or a filename, name the language.
///
/// Backed by anything from file extensions to full parsers; the
/// scoring engine only needs the label.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, path: Option<&str>, content: &str) -> Detection;
}

/// Extension-first detector with a content-keyword fallback.
#[derive(Debug, Default, Clone)]
pub struct ExtensionDetector;

impl ExtensionDetector {
    fn by_extension(path: &str) -> Option<&'static str> {
        let ext = path.rsplit('.').next()?;
        let language = match ext {
            "rs" => "rust",
            "py" => "python",
            "js" | "jsx" => "javascript",
            "ts" | "tsx" => "typescript",
            "go" => "go",
            "java" => "java",
            "rb" => "ruby",
            "c" | "h" => "c",
            "cpp" | "cc" | "hpp" => "cpp",
            _ => return None,
        };
        Some(language)
    }

    fn by_content(content: &str) -> Option<&'static str> {
        if content.contains("fn ") && (content.contains("let ") || content.contains("impl ")) {
            return Some("rust");
        }
        if content.contains("def ") && content.contains(":") {
            return Some("python");
        }
        if content.contains("function ") || content.contains("=> {") {
            return Some("javascript");
        }
        None
    }
}

impl LanguageDetector for ExtensionDetector {
    fn detect(&self, path: Option<&str>, content: &str) -> Detection {
        if let Some(language) = path.and_then(Self::by_extension) {
            return Detection {
                language: language.to_string(),
                confidence: 0.9,
            };
        }
        if let Some(language) = Self::by_content(content) {
            return Detection {
                language: language.to_string(),
                confidence: 0.5,
            };
        }
        Detection::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_by_extension() {
        let d = ExtensionDetector;
        assert_eq!(d.detect(Some("src/main.rs"), "").language, "rust");
        assert_eq!(d.detect(Some("app.py"), "").language, "python");
        assert_eq!(d.detect(Some("index.tsx"), "").language, "typescript");
        assert_eq!(d.detect(Some("main.go"), "").language, "go");
    }

    #[test]
    fn test_extension_beats_content() {
        let d = ExtensionDetector;
        let detection = d.detect(Some("script.py"), "fn main() { let x = 1; }");
        assert_eq!(detection.language, "python");
        assert!(detection.confidence > 0.5);
    }

    #[test]
    fn test_content_fallback() {
        let d = ExtensionDetector;
        assert_eq!(
            d.detect(None, "fn add(a: u32) -> u32 { let b = 1; a + b }")
                .language,
            "rust"
        );
        assert_eq!(
            d.detect(None, "def add(a, b):\n    return a + b").language,
            "python"
        );
    }

    #[test]
    fn test_unknown_when_no_signal() {
        let d = ExtensionDetector;
        let detection = d.detect(Some("notes.txt"), "plain text");
        assert_eq!(detection.language, "unknown");
        assert_eq!(detection.confidence, 0.0);
    }
}
