//! `checkout` — restore file or branch snapshots into the working directory.

use crate::error::GitletError;
use crate::model::{Head, StagingArea};

use super::status::check_untracked_in_the_way;
use super::{wd, Repo};

/// `checkout -- <path>`: overwrite `path` in the working directory with
/// HEAD's tracked content.
///
/// # Errors
/// Returns [`GitletError::FileNotInCommit`] if HEAD does not track `path`.
pub fn file_from_head(repo: &Repo, path: &str) -> Result<(), GitletError> {
    repo.require_initialized()?;
    let (_head, commit) = repo.head_commit()?;
    file_from_commit_tree(repo, commit.tree(), path)
}

/// `checkout <commit_id> -- <path>`: overwrite `path` with the content it
/// has in the resolved commit.
///
/// # Errors
/// Returns [`GitletError::NoSuchCommit`] if `commit_id` does not resolve,
/// or [`GitletError::FileNotInCommit`] if that commit does not track
/// `path`.
pub fn file_from_commit(repo: &Repo, commit_id: &str, path: &str) -> Result<(), GitletError> {
    repo.require_initialized()?;
    let (_id, commit) = repo.resolve_commit(commit_id, GitletError::NoSuchCommit)?;
    file_from_commit_tree(repo, commit.tree(), path)
}

fn file_from_commit_tree(repo: &Repo, tree: &crate::model::Tree, path: &str) -> Result<(), GitletError> {
    let blob_id = tree.get(path).ok_or(GitletError::FileNotInCommit)?;
    let blob = repo.store().get_blob(blob_id)?;
    wd::write_file(repo.working_dir(), path, blob.content())?;
    Ok(())
}

/// `checkout <branch>`: switch the working directory, HEAD, and current
/// branch to `branch_name`'s snapshot.
///
/// # Errors
/// - [`GitletError::NoSuchBranch`] if `branch_name` does not exist.
/// - [`GitletError::AlreadyOnBranch`] if it is already the current branch.
/// - [`GitletError::UntrackedFileInTheWay`] per the reconciler's safety check.
pub fn branch(repo: &Repo, branch_name: &str) -> Result<(), GitletError> {
    repo.require_initialized()?;
    let head = repo.store().read_head()?;
    if head.current_branch() == branch_name {
        return Err(GitletError::AlreadyOnBranch);
    }
    let target_branch = repo
        .store()
        .get_ref(branch_name)?
        .ok_or(GitletError::NoSuchBranch)?;
    let target_commit = repo
        .store()
        .get_commit(target_branch.target().as_str())?
        .ok_or_else(|| GitletError::Internal(format!("branch {branch_name} points at missing commit")))?;

    let (_current_head, current_commit) = repo.head_commit()?;
    check_untracked_in_the_way(repo, current_commit.tree(), target_commit.tree())?;

    materialize_tree(repo, current_commit.tree(), target_commit.tree())?;

    let new_head = Head::new(branch_name.to_owned(), target_branch.target().clone());
    repo.store().write_head(&new_head)?;
    repo.store().write_staging(&StagingArea::new())
}

/// Overwrite every file in `target_tree` into the working directory, and
/// delete every file tracked by `current_tree` but absent from
/// `target_tree`.
pub(super) fn materialize_tree(
    repo: &Repo,
    current_tree: &crate::model::Tree,
    target_tree: &crate::model::Tree,
) -> Result<(), GitletError> {
    for (path, blob_id) in target_tree {
        let blob = repo.store().get_blob(blob_id)?;
        wd::write_file(repo.working_dir(), path, blob.content())?;
    }
    for path in current_tree.keys() {
        if !target_tree.contains_key(path) {
            wd::delete_file(repo.working_dir(), path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{add, commit, init};

    fn repo() -> (tempfile::TempDir, Repo) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repo::open(dir.path().to_path_buf()).unwrap();
        init::run(&repo).unwrap();
        (dir, repo)
    }

    #[test]
    fn checkout_file_not_in_head_fails() {
        let (_dir, repo) = repo();
        assert!(matches!(
            file_from_head(&repo, "missing.txt"),
            Err(GitletError::FileNotInCommit)
        ));
    }

    #[test]
    fn checkout_file_restores_head_content() {
        let (dir, repo) = repo();
        wd::write_file(dir.path(), "a.txt", b"original").unwrap();
        add::run(&repo, "a.txt").unwrap();
        commit::run(&repo, "add a", None).unwrap();

        wd::write_file(dir.path(), "a.txt", b"edited").unwrap();
        file_from_head(&repo, "a.txt").unwrap();
        assert_eq!(wd::read_file(dir.path(), "a.txt").unwrap(), b"original");
    }

    #[test]
    fn checkout_same_branch_fails() {
        let (_dir, repo) = repo();
        assert!(matches!(branch(&repo, "master"), Err(GitletError::AlreadyOnBranch)));
    }

    #[test]
    fn checkout_missing_branch_fails() {
        let (_dir, repo) = repo();
        assert!(matches!(branch(&repo, "nope"), Err(GitletError::NoSuchBranch)));
    }

    #[test]
    fn checkout_branch_with_untracked_file_in_the_way_fails() {
        let (dir, repo) = repo();
        wd::write_file(dir.path(), "common.txt", b"x").unwrap();
        add::run(&repo, "common.txt").unwrap();
        commit::run(&repo, "add common", None).unwrap();

        crate::engine::branch::create(&repo, "feature").unwrap();
        branch(&repo, "feature").unwrap();

        wd::write_file(dir.path(), "secret.txt", b"on feature").unwrap();
        add::run(&repo, "secret.txt").unwrap();
        commit::run(&repo, "add secret", None).unwrap();

        branch(&repo, "master").unwrap();
        assert!(!wd::file_exists(dir.path(), "secret.txt"));

        wd::write_file(dir.path(), "secret.txt", b"rogue, untracked by master").unwrap();

        assert!(matches!(
            branch(&repo, "feature"),
            Err(GitletError::UntrackedFileInTheWay)
        ));
    }
}
