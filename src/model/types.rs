//! Core identifier types for Gitlet.
//!
//! Foundation types used throughout the engine: validated content-address
//! identifiers for blobs and commits, and the tree mapping filenames to
//! blob ids.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ObjectId
// ---------------------------------------------------------------------------

/// A validated 40-character lowercase hex object id (SHA-1).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

impl ObjectId {
    /// The fixed length of a full (non-abbreviated) object id.
    pub const LEN: usize = 40;

    /// Create a new `ObjectId` from a string, validating format.
    ///
    /// # Errors
    /// Returns an error if the string is not exactly 40 lowercase hex characters.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        Self::validate(s)?;
        Ok(Self(s.to_owned()))
    }

    /// Return the inner hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the first 7 hex characters, as used in merge-commit log headers.
    #[must_use]
    pub fn short(&self) -> &str {
        &self.0[..7.min(self.0.len())]
    }

    /// Whether `prefix` is a prefix of this id's hex string.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    fn validate(s: &str) -> Result<(), ValidationError> {
        if s.len() != Self::LEN {
            return Err(ValidationError {
                value: s.to_owned(),
                reason: format!("expected {} hex characters, got {}", Self::LEN, s.len()),
            });
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        {
            return Err(ValidationError {
                value: s.to_owned(),
                reason: "must contain only lowercase hex characters (0-9, a-f)".to_owned(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ObjectId {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ObjectId {
    type Error = ValidationError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::validate(&s)?;
        Ok(Self(s))
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

// ---------------------------------------------------------------------------
// BlobId / CommitId
// ---------------------------------------------------------------------------

/// A content hash identifying a stored [`crate::model::blob::Blob`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobId(ObjectId);

impl BlobId {
    /// Wrap an already-hashed object id as a blob id.
    #[must_use]
    pub const fn from_object_id(id: ObjectId) -> Self {
        Self(id)
    }

    /// Return the inner [`ObjectId`].
    #[must_use]
    pub const fn as_object_id(&self) -> &ObjectId {
        &self.0
    }

    /// Return the hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A content hash identifying a stored [`crate::model::commit::Commit`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(ObjectId);

impl CommitId {
    /// Wrap an already-hashed object id as a commit id.
    #[must_use]
    pub const fn from_object_id(id: ObjectId) -> Self {
        Self(id)
    }

    /// Return the inner [`ObjectId`].
    #[must_use]
    pub const fn as_object_id(&self) -> &ObjectId {
        &self.0
    }

    /// Return the hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Return the first 7 hex characters, as shown after `Merge:` in `log`.
    #[must_use]
    pub fn short(&self) -> &str {
        self.0.short()
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The filename → blob-id mapping inside a commit. No subdirectories.
pub type Tree = BTreeMap<String, BlobId>;

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// A validation error for a Gitlet identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    /// The invalid value.
    pub value: String,
    /// Human-readable explanation.
    pub reason: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid object id {:?} — {}", self.value, self.reason)
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_valid() {
        let hex = "a".repeat(40);
        let id = ObjectId::new(&hex).unwrap();
        assert_eq!(id.as_str(), hex);
    }

    #[test]
    fn object_id_mixed_hex() {
        let hex = "0123456789abcdef0123456789abcdef01234567";
        assert!(ObjectId::new(hex).is_ok());
    }

    #[test]
    fn object_id_rejects_short() {
        assert!(ObjectId::new("abc123").is_err());
    }

    #[test]
    fn object_id_rejects_long() {
        let hex = "a".repeat(41);
        assert!(ObjectId::new(&hex).is_err());
    }

    #[test]
    fn object_id_rejects_uppercase() {
        let hex = "A".repeat(40);
        assert!(ObjectId::new(&hex).is_err());
    }

    #[test]
    fn object_id_rejects_non_hex() {
        let bad = "g".repeat(40);
        assert!(ObjectId::new(&bad).is_err());
    }

    #[test]
    fn object_id_short_is_first_seven() {
        let hex = "0123456789abcdef0123456789abcdef01234567";
        let id = ObjectId::new(hex).unwrap();
        assert_eq!(id.short(), "0123456");
    }

    #[test]
    fn object_id_starts_with() {
        let hex = "0123456789abcdef0123456789abcdef01234567";
        let id = ObjectId::new(hex).unwrap();
        assert!(id.starts_with("012345"));
        assert!(!id.starts_with("999999"));
    }

    #[test]
    fn object_id_serde_roundtrip() {
        let hex = "d".repeat(40);
        let id = ObjectId::new(&hex).unwrap();
        let json = serde_json_like_roundtrip(&id);
        assert_eq!(json, id);
    }

    fn serde_json_like_roundtrip(id: &ObjectId) -> ObjectId {
        let bytes = bincode::serialize(id).unwrap();
        bincode::deserialize(&bytes).unwrap()
    }

    #[test]
    fn blob_id_display_matches_inner() {
        let hex = "b".repeat(40);
        let id = BlobId::from_object_id(ObjectId::new(&hex).unwrap());
        assert_eq!(format!("{id}"), hex);
    }

    #[test]
    fn commit_id_short_matches_object_id_short() {
        let hex = "c".repeat(40);
        let id = CommitId::from_object_id(ObjectId::new(&hex).unwrap());
        assert_eq!(id.short(), "ccccccc");
    }

    #[test]
    fn commit_id_ordering_is_lexicographic() {
        let a = CommitId::from_object_id(ObjectId::new(&"1".repeat(40)).unwrap());
        let b = CommitId::from_object_id(ObjectId::new(&"2".repeat(40)).unwrap());
        assert!(a < b);
    }
}
