//! Blobs — immutable, content-addressed file snapshots.

use serde::{Deserialize, Serialize};

use super::hash::hash_bytes;
use super::types::BlobId;

/// An immutable snapshot of one file's bytes.
///
/// Two blobs with equal content share a single stored object: `blob_id` is
/// a pure function of `content`, so storing the same bytes twice is a no-op
/// at the object-store level (see [`crate::store::ObjectStore::put_blob`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    content: Vec<u8>,
}

impl Blob {
    /// Wrap `content` as a blob.
    #[must_use]
    pub fn new(content: Vec<u8>) -> Self {
        Self { content }
    }

    /// The blob's bytes.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Consume the blob, returning its bytes.
    #[must_use]
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }

    /// The content-address of this blob's bytes.
    #[must_use]
    pub fn id(&self) -> BlobId {
        BlobId::from_object_id(hash_bytes(&self.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_pure_function_of_content() {
        let a = Blob::new(b"hello".to_vec());
        let b = Blob::new(b"hello".to_vec());
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn different_content_different_id() {
        let a = Blob::new(b"hello".to_vec());
        let b = Blob::new(b"world".to_vec());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn content_accessors_round_trip() {
        let blob = Blob::new(b"payload".to_vec());
        assert_eq!(blob.content(), b"payload");
        assert_eq!(blob.into_content(), b"payload".to_vec());
    }
}
