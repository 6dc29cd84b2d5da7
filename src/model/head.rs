//! HEAD — the singleton pointer to the current commit and branch.

use serde::{Deserialize, Serialize};

use super::types::CommitId;

/// The repository's single HEAD slot.
///
/// Invariant: outside the brief window of an atomic update,
/// `head_commit == ref(current_branch).target`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Head {
    current_branch: String,
    head_commit: CommitId,
}

impl Head {
    /// Construct HEAD pointing at `head_commit` via `current_branch`.
    #[must_use]
    pub const fn new(current_branch: String, head_commit: CommitId) -> Self {
        Self {
            current_branch,
            head_commit,
        }
    }

    #[must_use]
    pub fn current_branch(&self) -> &str {
        &self.current_branch
    }

    #[must_use]
    pub const fn head_commit(&self) -> &CommitId {
        &self.head_commit
    }
}
