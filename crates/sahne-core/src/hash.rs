//! Content-based hashing for stable scene identifiers

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A SHA-256 hash of scene text.
///
/// Scene ids and the default seed of the variety pickers are derived from it,
/// so analyzing the same text twice yields the same output.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Compute a hash from bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let result = hasher.finalize();
        Self(result.into())
    }

    /// Compute a hash from text
    pub fn from_text(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }

    /// Get the hash as a hex string
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// First 12 hex characters, used in scene ids
    pub fn short(&self) -> String {
        self.to_hex()[..12].to_string()
    }

    /// Fold the leading bytes into a `u64` seed
    pub fn seed(&self) -> u64 {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.0[..8]);
        u64::from_le_bytes(bytes)
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistent_hashing() {
        let h1 = ContentHash::from_text("Kalbi kırık kadın ağladı.");
        let h2 = ContentHash::from_text("Kalbi kırık kadın ağladı.");
        assert_eq!(h1, h2);
        assert_eq!(h1.seed(), h2.seed());
    }

    #[test]
    fn test_different_content_different_hash() {
        let h1 = ContentHash::from_text("sabah");
        let h2 = ContentHash::from_text("akşam");
        assert_ne!(h1, h2);
        assert_ne!(h1.short(), h2.short());
    }

    #[test]
    fn test_hex_output() {
        let h = ContentHash::from_text("hello");
        assert_eq!(h.to_hex().len(), 64);
        assert_eq!(h.short().len(), 12);
        assert!(h.to_hex().starts_with(&h.short()));
    }
}
