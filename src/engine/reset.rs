//! `reset <commit_id>` — move HEAD and the current branch to an arbitrary commit.

use crate::error::GitletError;
use crate::model::{Head, StagingArea};

use super::checkout::materialize_tree;
use super::status::check_untracked_in_the_way;
use super::Repo;

/// Move the current branch and HEAD to `commit_id`, materializing its tree
/// into the working directory.
///
/// # Errors
/// - [`GitletError::NoSuchCommit`] if `commit_id` does not resolve.
/// - [`GitletError::UntrackedFileInTheWay`] per the reconciler's safety check.
pub fn run(repo: &Repo, commit_id: &str) -> Result<(), GitletError> {
    repo.require_initialized()?;
    let (target_id, target_commit) = repo.resolve_commit(commit_id, GitletError::NoSuchCommit)?;
    let (head, current_commit) = repo.head_commit()?;

    check_untracked_in_the_way(repo, current_commit.tree(), target_commit.tree())?;
    materialize_tree(repo, current_commit.tree(), target_commit.tree())?;

    repo.advance_branch(head.current_branch(), target_id.clone())?;
    let new_head = Head::new(head.current_branch().to_owned(), target_id);
    repo.store().write_head(&new_head)?;
    repo.store().write_staging(&StagingArea::new())
}
