//! Commits — immutable snapshots of the tracked tree plus metadata.

use serde::{Deserialize, Serialize};

use super::hash::hash_bytes;
use super::types::{CommitId, Tree};

/// The message and timestamp of the repository's very first commit.
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Author identity attached to a commit for display purposes.
///
/// Cosmetic only: excluded from [`Commit::id`]'s hash, so two commits that
/// differ only in author (e.g. produced by different `.gitlet/config`
/// files) are *not* distinguished by content-addressing. This keeps the
/// hash contract in the data model stable regardless of configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    pub name: String,
    /// Display email.
    pub email: String,
}

/// An immutable snapshot of the tracked tree, plus metadata and up to two
/// parent ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    message: String,
    /// Unix timestamp in seconds.
    timestamp: i64,
    parent1: Option<CommitId>,
    parent2: Option<CommitId>,
    tree: Tree,
    author: Author,
}

/// The subset of a commit's fields that participate in its content hash.
/// `author` is deliberately excluded — see [`Author`].
#[derive(Serialize)]
struct HashedFields<'a> {
    message: &'a str,
    timestamp: i64,
    parent1: &'a Option<CommitId>,
    parent2: &'a Option<CommitId>,
    tree: &'a Tree,
}

impl Commit {
    /// Build a new commit. `commit_id` is computed lazily by [`Commit::id`];
    /// it is never stored on `self` so the struct cannot go stale.
    #[must_use]
    pub fn new(
        message: String,
        timestamp: i64,
        parent1: Option<CommitId>,
        parent2: Option<CommitId>,
        tree: Tree,
        author: Author,
    ) -> Self {
        Self {
            message,
            timestamp,
            parent1,
            parent2,
            tree,
            author,
        }
    }

    /// The repository's first commit: no parents, an empty tree, the fixed
    /// message `"initial commit"`, and timestamp = Unix epoch.
    #[must_use]
    pub fn initial(author: Author) -> Self {
        Self::new(
            INITIAL_COMMIT_MESSAGE.to_owned(),
            0,
            None,
            None,
            Tree::new(),
            author,
        )
    }

    /// This commit's content-address. A pure function of every field except
    /// `author`.
    #[must_use]
    pub fn id(&self) -> CommitId {
        let fields = HashedFields {
            message: &self.message,
            timestamp: self.timestamp,
            parent1: &self.parent1,
            parent2: &self.parent2,
            tree: &self.tree,
        };
        let bytes = bincode::serialize(&fields).expect("commit fields are always serializable");
        CommitId::from_object_id(hash_bytes(&bytes))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    #[must_use]
    pub const fn parent1(&self) -> Option<&CommitId> {
        self.parent1.as_ref()
    }

    #[must_use]
    pub const fn parent2(&self) -> Option<&CommitId> {
        self.parent2.as_ref()
    }

    #[must_use]
    pub const fn tree(&self) -> &Tree {
        &self.tree
    }

    #[must_use]
    pub const fn author(&self) -> &Author {
        &self.author
    }

    /// `true` for merge commits (those with a second parent).
    #[must_use]
    pub const fn is_merge(&self) -> bool {
        self.parent2.is_some()
    }
}
