//! `commit <message>` — fold the staging area into a new commit.

use crate::error::GitletError;
use crate::model::{Commit, CommitId, StagingArea};

use super::{apply_staging, now_unix, Repo};

/// Record a new commit from the current staging area.
///
/// `second_parent`, when set, makes this a merge commit (used by
/// [`crate::engine::merge`]).
///
/// # Errors
/// - [`GitletError::NothingToCommit`] if the staging area is empty.
/// - [`GitletError::EmptyCommitMessage`] if `message` is empty.
///
/// Checked in that order: an empty staging area is reported even when the
/// message is also empty.
pub fn run(repo: &Repo, message: &str, second_parent: Option<CommitId>) -> Result<CommitId, GitletError> {
    repo.require_initialized()?;

    let staging = repo.store().read_staging()?;
    if staging.is_empty() {
        return Err(GitletError::NothingToCommit);
    }
    if message.is_empty() {
        return Err(GitletError::EmptyCommitMessage);
    }

    let (head, parent_commit) = repo.head_commit()?;
    let tree = apply_staging(parent_commit.tree(), staging.additions(), staging.removals());

    let commit = Commit::new(
        message.to_owned(),
        now_unix(),
        Some(head.head_commit().clone()),
        second_parent,
        tree,
        repo.author(),
    );
    let commit_id = repo.store().put_commit(&commit)?;
    repo.advance_branch(head.current_branch(), commit_id.clone())?;
    repo.store().write_staging(&StagingArea::new())?;

    Ok(commit_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{add, init, wd};

    fn repo() -> (tempfile::TempDir, Repo) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repo::open(dir.path().to_path_buf()).unwrap();
        init::run(&repo).unwrap();
        (dir, repo)
    }

    #[test]
    fn commit_with_empty_staging_fails() {
        let (_dir, repo) = repo();
        assert!(matches!(
            run(&repo, "nothing staged", None),
            Err(GitletError::NothingToCommit)
        ));
    }

    #[test]
    fn commit_with_empty_message_fails() {
        let (dir, repo) = repo();
        wd::write_file(dir.path(), "a.txt", b"x").unwrap();
        add::run(&repo, "a.txt").unwrap();
        assert!(matches!(run(&repo, "", None), Err(GitletError::EmptyCommitMessage)));
    }

    #[test]
    fn empty_staging_takes_precedence_over_empty_message() {
        let (_dir, repo) = repo();
        assert!(matches!(run(&repo, "", None), Err(GitletError::NothingToCommit)));
    }

    #[test]
    fn commit_advances_head_and_clears_staging() {
        let (dir, repo) = repo();
        wd::write_file(dir.path(), "a.txt", b"x").unwrap();
        add::run(&repo, "a.txt").unwrap();

        let (old_head, _) = repo.head_commit().unwrap();
        let new_id = run(&repo, "add a.txt", None).unwrap();

        let (new_head, new_commit) = repo.head_commit().unwrap();
        assert_eq!(new_head.head_commit(), &new_id);
        assert_eq!(new_commit.parent1(), Some(old_head.head_commit()));
        assert_eq!(new_commit.tree().len(), 1);
        assert!(repo.store().read_staging().unwrap().is_empty());
    }

    #[test]
    fn commit_with_second_parent_is_a_merge_commit() {
        let (dir, repo) = repo();
        wd::write_file(dir.path(), "a.txt", b"x").unwrap();
        add::run(&repo, "a.txt").unwrap();
        let (head, _) = repo.head_commit().unwrap();

        wd::write_file(dir.path(), "b.txt", b"y").unwrap();
        add::run(&repo, "b.txt").unwrap();
        let merge_id = run(&repo, "Merged other into master.", Some(head.head_commit().clone())).unwrap();

        let merge_commit = repo.store().get_commit(merge_id.as_str()).unwrap().unwrap();
        assert!(merge_commit.is_merge());
    }
}
