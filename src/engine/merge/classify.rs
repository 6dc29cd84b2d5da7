//! Per-file eight-case merge classification and conflict resolution.

use crate::error::GitletError;
use crate::model::{BlobId, Tree};

use crate::engine::{wd, Repo};

/// What a single file's merge classification means for the final tree and
/// working directory. Derived from `is_conflict` plus direct comparison of
/// the split/current/other blob ids by the orchestrator in `mod.rs`.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No action: the file keeps whatever state it already has (its
    /// current-side content, or absence).
    Unchanged,
    /// Check out `other`'s content and stage it (cases 1 and 5).
    TakeOther(BlobId),
    /// Stage the file for removal and delete it from the working directory
    /// (case 6).
    Remove,
    /// A conflict: write the marked-up content to the working directory and
    /// stage the resulting blob (case 8).
    Conflict,
}

/// Classify one file given its blob id in the split point (`s`), current
/// branch (`c`), and other branch (`o`), per the eight-case table.
///
/// Assumes `is_conflict(s, c, o)` is `false` for the non-conflict arms
/// below; callers (see `mod.rs`) check that first.
#[must_use]
pub fn classify(s: Option<&BlobId>, c: Option<&BlobId>, o: Option<&BlobId>) -> Outcome {
    if is_conflict(s, c, o) {
        return Outcome::Conflict;
    }
    match (s, c, o) {
        (Some(_), None, None) => Outcome::Unchanged, // case 3b: removed on both sides
        (None, Some(_), None) => Outcome::Unchanged, // case 4: added only in current
        (None, None, Some(o_blob)) => Outcome::TakeOther(o_blob.clone()), // case 5
        (None, Some(_), Some(_)) => Outcome::Unchanged, // case 3a, no split entry
        (Some(s_blob), Some(c_blob), None) => {
            if c_blob == s_blob {
                Outcome::Remove // case 6
            } else {
                Outcome::Unchanged // unreachable: is_conflict would have fired
            }
        }
        (Some(s_blob), None, Some(o_blob)) => {
            if o_blob == s_blob {
                Outcome::Unchanged // case 7
            } else {
                Outcome::Unchanged // unreachable: is_conflict would have fired
            }
        }
        (Some(s_blob), Some(c_blob), Some(o_blob)) => {
            if c_blob == s_blob && o_blob != s_blob {
                Outcome::TakeOther(o_blob.clone()) // case 1
            } else {
                Outcome::Unchanged // case 2, or case 3a with a split entry
            }
        }
        (None, None, None) => Outcome::Unchanged, // not reachable: p always tracked somewhere
    }
}

/// Build the literal conflict-marker content for file `p`, given the
/// working-directory bytes of each side (empty when absent).
#[must_use]
pub fn conflict_content(current_content: &[u8], other_content: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"<<<<<<< HEAD\n");
    bytes.extend_from_slice(current_content);
    bytes.extend_from_slice(b"=======\n");
    bytes.extend_from_slice(other_content);
    bytes.extend_from_slice(b">>>>>>>\n");
    bytes
}

/// Whether the given blobs constitute a case-8 conflict per the
/// classification table.
#[must_use]
pub fn is_conflict(s: Option<&BlobId>, c: Option<&BlobId>, o: Option<&BlobId>) -> bool {
    match (s, c, o) {
        (Some(s), Some(c), Some(o)) => c != s && o != s && c != o,
        (None, Some(c), Some(o)) => c != o,
        (Some(s), Some(c), None) => c != s,
        (Some(s), None, Some(o)) => o != s,
        _ => false,
    }
}

/// Read blob content for `p` from `tree`, or an empty vector if absent.
pub fn blob_content(repo: &Repo, tree: &Tree, path: &str) -> Result<Vec<u8>, GitletError> {
    match tree.get(path) {
        Some(id) => Ok(repo.store().get_blob(id)?.into_content()),
        None => Ok(Vec::new()),
    }
}

/// Write `p`'s conflict content to the working directory and persist it as
/// a blob.
pub fn write_conflict(repo: &Repo, path: &str, current: &[u8], other: &[u8]) -> Result<BlobId, GitletError> {
    let content = conflict_content(current, other);
    wd::write_file(repo.working_dir(), path, &content)?;
    repo.store().put_blob(content)
}
