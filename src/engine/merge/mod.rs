//! `merge <branch>` — split-point discovery plus per-file reconciliation.

mod classify;
mod split_point;

use std::collections::BTreeSet;

use crate::error::GitletError;
use crate::model::{Commit, StagingArea, Tree};

use super::checkout::materialize_tree;
use super::status::check_untracked_in_the_way;
use super::{now_unix, Repo};

use classify::Outcome;

/// Outcome of a successful `merge` invocation, for the CLI to report.
pub enum MergeResult {
    /// `other` is already an ancestor of the current branch; nothing to do.
    AlreadyUpToDate,
    /// The current branch had no divergent history; it was fast-forwarded.
    FastForwarded,
    /// A merge commit was created. `had_conflict` controls whether the CLI
    /// prints the conflict notice.
    Merged { had_conflict: bool },
}

/// Merge `other_branch` into the current branch.
///
/// # Errors
/// - [`GitletError::UncommittedChanges`] if the staging area is non-empty.
/// - [`GitletError::NoSuchBranch`] if `other_branch` does not exist.
/// - [`GitletError::CannotMergeSelf`] if it names the current branch.
/// - [`GitletError::UntrackedFileInTheWay`] per the reconciler's safety check.
pub fn run(repo: &Repo, other_branch: &str) -> Result<MergeResult, GitletError> {
    repo.require_initialized()?;

    let staging = repo.store().read_staging()?;
    if !staging.is_empty() {
        return Err(GitletError::UncommittedChanges);
    }

    let head = repo.store().read_head()?;
    if head.current_branch() == other_branch {
        return Err(GitletError::CannotMergeSelf);
    }
    let other_ref = repo
        .store()
        .get_ref(other_branch)?
        .ok_or(GitletError::NoSuchBranch)?;

    let current_id = head.head_commit().clone();
    let other_id = other_ref.target().clone();

    let current_commit = repo
        .store()
        .get_commit(current_id.as_str())?
        .ok_or_else(|| GitletError::Internal("HEAD commit missing".to_owned()))?;
    let other_commit = repo
        .store()
        .get_commit(other_id.as_str())?
        .ok_or_else(|| GitletError::Internal(format!("branch {other_branch} commit missing")))?;

    check_untracked_in_the_way(repo, current_commit.tree(), other_commit.tree())?;

    let split_id = split_point::find(repo, &current_id, &other_id)?;

    if split_id == other_id {
        return Ok(MergeResult::AlreadyUpToDate);
    }
    if split_id == current_id {
        super::checkout::branch(repo, other_branch)?;
        return Ok(MergeResult::FastForwarded);
    }

    let split_commit = repo
        .store()
        .get_commit(split_id.as_str())?
        .ok_or_else(|| GitletError::Internal("split-point commit missing".to_owned()))?;

    let (new_tree, had_conflict) = reconcile_trees(
        repo,
        split_commit.tree(),
        current_commit.tree(),
        other_commit.tree(),
    )?;

    materialize_tree(repo, current_commit.tree(), &new_tree)?;

    // The per-file classification stages each resolved path (§4.7) as part
    // of building `new_tree` above; the resulting commit is built directly
    // from that tree rather than going through the ordinary add/commit
    // staging cycle, so the staging area only needs clearing afterward.
    let commit = Commit::new(
        format!("Merged {other_branch} into {}.", head.current_branch()),
        now_unix(),
        Some(current_id),
        Some(other_id),
        new_tree,
        repo.author(),
    );
    let commit_id = repo.store().put_commit(&commit)?;
    repo.advance_branch(head.current_branch(), commit_id)?;
    repo.store().write_staging(&StagingArea::new())?;

    Ok(MergeResult::Merged { had_conflict })
}

/// Classify every file across `split`/`current`/`other` and produce the
/// resulting tree plus whether any file conflicted.
fn reconcile_trees(
    repo: &Repo,
    split: &Tree,
    current: &Tree,
    other: &Tree,
) -> Result<(Tree, bool), GitletError> {
    let mut paths: BTreeSet<&str> = BTreeSet::new();
    paths.extend(split.keys().map(String::as_str));
    paths.extend(current.keys().map(String::as_str));
    paths.extend(other.keys().map(String::as_str));

    let mut new_tree = Tree::new();
    let mut had_conflict = false;

    for path in paths {
        let s = split.get(path);
        let c = current.get(path);
        let o = other.get(path);

        match classify::classify(s, c, o) {
            Outcome::Unchanged => {
                if let Some(blob) = c {
                    new_tree.insert(path.to_owned(), blob.clone());
                }
            }
            Outcome::TakeOther(blob) => {
                let content = classify::blob_content(repo, other, path)?;
                super::wd::write_file(repo.working_dir(), path, &content)?;
                new_tree.insert(path.to_owned(), blob);
            }
            Outcome::Remove => {
                super::wd::delete_file(repo.working_dir(), path)?;
            }
            Outcome::Conflict => {
                had_conflict = true;
                let current_content = classify::blob_content(repo, current, path)?;
                let other_content = classify::blob_content(repo, other, path)?;
                let blob_id = classify::write_conflict(repo, path, &current_content, &other_content)?;
                new_tree.insert(path.to_owned(), blob_id);
            }
        }
    }

    Ok((new_tree, had_conflict))
}
