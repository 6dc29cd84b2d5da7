//! `rm <file>` — unstage and/or mark a file for removal.

use crate::error::GitletError;

use super::{wd, Repo};

/// Remove `path` from tracking.
///
/// - If `path` is staged for addition, drop that staged addition.
/// - If `path` is tracked by HEAD, stage it for removal and delete it from
///   the working directory (if present there).
/// - If neither applies, fail with [`GitletError::NoReasonToRemove`].
pub fn run(repo: &Repo, path: &str) -> Result<(), GitletError> {
    repo.require_initialized()?;
    let (_head, commit) = repo.head_commit()?;
    let mut staging = repo.store().read_staging()?;

    let was_staged = staging.unstage_addition(path);
    let tracked_by_head = commit.tree().contains_key(path);

    if !was_staged && !tracked_by_head {
        return Err(GitletError::NoReasonToRemove);
    }

    if tracked_by_head {
        staging.stage_removal(path.to_owned());
        wd::delete_file(repo.working_dir(), path)?;
    }

    repo.store().write_staging(&staging)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{add, init};

    fn repo() -> (tempfile::TempDir, Repo) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repo::open(dir.path().to_path_buf()).unwrap();
        init::run(&repo).unwrap();
        (dir, repo)
    }

    #[test]
    fn rm_untracked_unstaged_file_fails() {
        let (_dir, repo) = repo();
        assert!(matches!(run(&repo, "ghost.txt"), Err(GitletError::NoReasonToRemove)));
    }

    #[test]
    fn rm_staged_addition_just_unstages() {
        let (dir, repo) = repo();
        wd::write_file(dir.path(), "a.txt", b"x").unwrap();
        add::run(&repo, "a.txt").unwrap();

        run(&repo, "a.txt").unwrap();

        assert!(wd::file_exists(dir.path(), "a.txt"));
        let staging = repo.store().read_staging().unwrap();
        assert!(!staging.is_staged_for_addition("a.txt"));
        assert!(!staging.is_staged_for_removal("a.txt"));
    }

    #[test]
    fn rm_tracked_file_stages_removal_and_deletes_from_wd() {
        let (dir, repo) = repo();
        wd::write_file(dir.path(), "a.txt", b"x").unwrap();
        add::run(&repo, "a.txt").unwrap();

        // Promote the staged addition into HEAD's tree by hand, as commit
        // would, so rm sees it as tracked.
        let (head, commit) = repo.head_commit().unwrap();
        let staging_before = repo.store().read_staging().unwrap();
        let tree = crate::engine::apply_staging(
            commit.tree(),
            staging_before.additions(),
            staging_before.removals(),
        );
        let new_commit = crate::model::Commit::new(
            "add a".to_owned(),
            1,
            commit.parent1().cloned(),
            None,
            tree,
            repo.author(),
        );
        let id = repo.store().put_commit(&new_commit).unwrap();
        repo.advance_branch(head.current_branch(), id).unwrap();
        repo.store().write_staging(&crate::model::StagingArea::new()).unwrap();

        run(&repo, "a.txt").unwrap();

        assert!(!wd::file_exists(dir.path(), "a.txt"));
        let staging = repo.store().read_staging().unwrap();
        assert!(staging.is_staged_for_removal("a.txt"));
    }
}
