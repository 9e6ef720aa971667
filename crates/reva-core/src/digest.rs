//! Content digests for submissions and report artifacts.

use serde::{Deserialize, Serialize};
use sha2::Sha256;

/// A SHA-256 digest rendered as a lowercase hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Compute the SHA-256 digest of the given bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        use sha2::Digest;
        let mut hasher = Sha256::new();
        hasher.update(data);
        ContentDigest(hex::encode(hasher.finalize()))
    }

    /// Return the full hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form (first 12 hex chars).
    pub fn short(&self) -> &str {
        &self.0[..12.min(self.0.len())]
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_64_hex_chars() {
        let d = ContentDigest::from_bytes(b"fn main() {}");
        assert_eq!(d.as_str().len(), 64);
        assert!(d.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_short_form() {
        let d = ContentDigest::from_bytes(b"content");
        assert_eq!(d.short().len(), 12);
        assert!(d.as_str().starts_with(d.short()));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            ContentDigest::from_bytes(b"same"),
            ContentDigest::from_bytes(b"same")
        );
        assert_ne!(
            ContentDigest::from_bytes(b"same"),
            ContentDigest::from_bytes(b"different")
        );
    }
}
