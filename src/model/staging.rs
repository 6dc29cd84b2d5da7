//! The staging area — a pending mutation to the next commit.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::{BlobId, Tree};

/// The pending delta (adds + removes) that `commit` will fold into the next
/// tree.
///
/// Invariant: `additions` and `removals` are always disjoint — every
/// mutating method here maintains that by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingArea {
    additions: Tree,
    removals: BTreeSet<String>,
}

impl StagingArea {
    /// A freshly initialized, empty staging area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn additions(&self) -> &Tree {
        &self.additions
    }

    #[must_use]
    pub const fn removals(&self) -> &BTreeSet<String> {
        &self.removals
    }

    /// Whether both sets are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    /// Stage `path` as tracking `blob`, overwriting any prior addition for
    /// the same path, and un-stage any pending removal of `path`.
    pub fn stage_addition(&mut self, path: String, blob: BlobId) {
        self.removals.remove(&path);
        self.additions.insert(path, blob);
    }

    /// Drop a staged addition for `path`, if any. Returns `true` if one was
    /// present.
    pub fn unstage_addition(&mut self, path: &str) -> bool {
        self.additions.remove(path).is_some()
    }

    /// Drop a staged removal for `path`, if any. Returns `true` if one was
    /// present.
    pub fn unstage_removal(&mut self, path: &str) -> bool {
        self.removals.remove(path)
    }

    /// Stage `path` for removal, and drop any pending addition of `path`.
    pub fn stage_removal(&mut self, path: String) {
        self.additions.remove(&path);
        self.removals.insert(path);
    }

    /// Whether `path` has a pending addition.
    #[must_use]
    pub fn is_staged_for_addition(&self, path: &str) -> bool {
        self.additions.contains_key(path)
    }

    /// Whether `path` has a pending removal.
    #[must_use]
    pub fn is_staged_for_removal(&self, path: &str) -> bool {
        self.removals.contains(path)
    }

    /// Clear both sets.
    pub fn clear(&mut self) {
        self.additions.clear();
        self.removals.clear();
    }
}
