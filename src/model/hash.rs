//! Deterministic content hashing.
//!
//! A thin wrapper around the `sha1` crate: everything content-addressed in
//! Gitlet (blobs, commits) hashes a `bincode`-serialized byte sequence and
//! renders the digest as 40 lowercase hex characters via [`ObjectId`].

use sha1::{Digest, Sha1};

use super::types::ObjectId;

/// Hash `bytes` and return the result as a validated [`ObjectId`].
#[must_use]
pub fn hash_bytes(bytes: &[u8]) -> ObjectId {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    let hex = digest.iter().map(|b| format!("{b:02x}")).collect::<String>();
    ObjectId::new(&hex).expect("sha1 digest is always 40 lowercase hex characters")
}
