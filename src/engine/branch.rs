//! `branch <name>` / `rm-branch <name>` — named ref management.

use crate::error::GitletError;
use crate::model::Branch;

use super::Repo;

/// Create a new branch named `name` pointing at the current HEAD commit.
///
/// # Errors
/// Returns [`GitletError::BranchExists`] if `name` is already taken.
pub fn create(repo: &Repo, name: &str) -> Result<(), GitletError> {
    repo.require_initialized()?;
    if repo.store().get_ref(name)?.is_some() {
        return Err(GitletError::BranchExists);
    }
    let (head, _commit) = repo.head_commit()?;
    let branch = Branch::new(name.to_owned(), head.head_commit().clone());
    repo.store().put_ref(&branch)
}

/// Delete the branch named `name`.
///
/// # Errors
/// - [`GitletError::NoSuchBranch`] if `name` does not exist.
/// - [`GitletError::CannotRemoveCurrentBranch`] if `name` is the current branch.
pub fn delete(repo: &Repo, name: &str) -> Result<(), GitletError> {
    repo.require_initialized()?;
    let head = repo.store().read_head()?;
    if head.current_branch() == name {
        return Err(GitletError::CannotRemoveCurrentBranch);
    }
    if repo.store().get_ref(name)?.is_none() {
        return Err(GitletError::NoSuchBranch);
    }
    repo.store().delete_ref(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::init;

    fn repo() -> (tempfile::TempDir, Repo) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repo::open(dir.path().to_path_buf()).unwrap();
        init::run(&repo).unwrap();
        (dir, repo)
    }

    #[test]
    fn create_new_branch_points_at_head() {
        let (_dir, repo) = repo();
        create(&repo, "feature").unwrap();
        let (head, _) = repo.head_commit().unwrap();
        let branch = repo.store().get_ref("feature").unwrap().unwrap();
        assert_eq!(branch.target(), head.head_commit());
    }

    #[test]
    fn create_existing_branch_fails() {
        let (_dir, repo) = repo();
        assert!(matches!(create(&repo, "master"), Err(GitletError::BranchExists)));
    }

    #[test]
    fn delete_missing_branch_fails() {
        let (_dir, repo) = repo();
        assert!(matches!(delete(&repo, "nope"), Err(GitletError::NoSuchBranch)));
    }

    #[test]
    fn delete_current_branch_fails() {
        let (_dir, repo) = repo();
        assert!(matches!(
            delete(&repo, "master"),
            Err(GitletError::CannotRemoveCurrentBranch)
        ));
    }

    #[test]
    fn delete_other_branch_removes_ref_but_not_commits() {
        let (_dir, repo) = repo();
        create(&repo, "feature").unwrap();
        let (head, _) = repo.head_commit().unwrap();
        delete(&repo, "feature").unwrap();
        assert!(repo.store().get_ref("feature").unwrap().is_none());
        assert!(repo
            .store()
            .get_commit(head.head_commit().as_str())
            .unwrap()
            .is_some());
    }
}
