use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

/// Lowercase hex SHA-1 digest identifying a stored object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub const HEX_LEN: usize = 40;

    pub fn for_bytes(bytes: &[u8]) -> Self {
        use sha1::{Digest, Sha1};
        let mut hasher = Sha1::new();
        hasher.update(bytes);
        ObjectId(hex::encode(hasher.finalize()))
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != Self::HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()) {
            return Err(Error::InvalidObjectId(s.to_string()));
        }
        Ok(ObjectId(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for human-facing output.
    pub fn short(&self) -> &str {
        &self.0[..7]
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single commit record.
///
/// Field declaration order is the canonical key order: serde_json emits
/// struct fields in declaration order, and the snapshot is a `BTreeMap`, so
/// identical logical commits always serialize to identical bytes. The
/// commit's own identifier is the digest of that canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub message: String,
    pub parent: Option<ObjectId>,
    pub snapshot: BTreeMap<String, ObjectId>,
    pub timestamp: DateTime<Utc>,
}

impl Commit {
    pub fn new(
        message: String,
        snapshot: BTreeMap<String, ObjectId>,
        parent: Option<ObjectId>,
    ) -> Self {
        Self {
            message,
            parent,
            snapshot,
            timestamp: Utc::now(),
        }
    }

    pub fn to_canonical_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_is_lowercase_hex() {
        let id = ObjectId::for_bytes(b"hello");
        assert_eq!(id.as_str().len(), ObjectId::HEX_LEN);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_object_id_deterministic() {
        assert_eq!(ObjectId::for_bytes(b"hello"), ObjectId::for_bytes(b"hello"));
        assert_ne!(ObjectId::for_bytes(b"hello"), ObjectId::for_bytes(b"world"));
    }

    #[test]
    fn test_object_id_short_form() {
        let id = ObjectId::for_bytes(b"hello");
        assert_eq!(id.short(), &id.as_str()[..7]);
        assert_eq!(id.short().len(), 7);
    }

    #[test]
    fn test_object_id_from_hex_rejects_garbage() {
        assert!(ObjectId::from_hex("abc").is_err());
        assert!(ObjectId::from_hex(&"g".repeat(40)).is_err());
        assert!(ObjectId::from_hex(&"A".repeat(40)).is_err());

        let id = ObjectId::for_bytes(b"hello");
        assert_eq!(ObjectId::from_hex(id.as_str()).unwrap(), id);
    }

    #[test]
    fn test_canonical_serialization_is_stable() {
        let mut snapshot = BTreeMap::new();
        snapshot.insert("b.txt".to_string(), ObjectId::for_bytes(b"two"));
        snapshot.insert("a.txt".to_string(), ObjectId::for_bytes(b"one"));

        let commit = Commit::new("initial".to_string(), snapshot, None);
        let first = commit.to_canonical_json().unwrap();
        let second = commit.to_canonical_json().unwrap();
        assert_eq!(first, second);

        let text = String::from_utf8(first).unwrap();
        let message_pos = text.find("\"message\"").unwrap();
        let parent_pos = text.find("\"parent\"").unwrap();
        let snapshot_pos = text.find("\"snapshot\"").unwrap();
        let timestamp_pos = text.find("\"timestamp\"").unwrap();
        assert!(message_pos < parent_pos);
        assert!(parent_pos < snapshot_pos);
        assert!(snapshot_pos < timestamp_pos);

        let a_pos = text.find("a.txt").unwrap();
        let b_pos = text.find("b.txt").unwrap();
        assert!(a_pos < b_pos);
    }

    #[test]
    fn test_commit_round_trip() {
        let mut snapshot = BTreeMap::new();
        snapshot.insert("a.txt".to_string(), ObjectId::for_bytes(b"hello"));

        let commit = Commit::new("first".to_string(), snapshot, None);
        let bytes = commit.to_canonical_json().unwrap();
        let parsed = Commit::from_json(&bytes).unwrap();

        assert_eq!(commit, parsed);
        assert!(parsed.parent.is_none());
    }
}
