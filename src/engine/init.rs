//! `init` — create a new repository in the current working directory.

use crate::error::GitletError;
use crate::model::{Branch, Commit, Head};

use super::Repo;

/// Default name of the branch created by `init`.
pub const DEFAULT_BRANCH: &str = "master";

/// Create `.gitlet/` with its initial commit, default branch, and HEAD.
///
/// # Errors
/// Returns [`GitletError::AlreadyInitialized`] if `.gitlet` already exists.
pub fn run(repo: &Repo) -> Result<(), GitletError> {
    if repo.is_initialized() {
        return Err(GitletError::AlreadyInitialized);
    }
    repo.store().init_layout()?;

    let commit = Commit::initial(repo.author());
    let commit_id = repo.store().put_commit(&commit)?;

    let branch = Branch::new(DEFAULT_BRANCH.to_owned(), commit_id.clone());
    repo.store().put_ref(&branch)?;

    let head = Head::new(DEFAULT_BRANCH.to_owned(), commit_id);
    repo.store().write_head(&head)?;

    repo.store().write_staging(&crate::model::StagingArea::new())?;

    repo.config()
        .save(&repo.store().paths().config_file())
        .map_err(|err| GitletError::ConfigError {
            path: err.path.unwrap_or_default(),
            detail: err.message,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> (tempfile::TempDir, Repo) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repo::open(dir.path().to_path_buf()).unwrap();
        (dir, repo)
    }

    #[test]
    fn init_creates_master_with_initial_commit() {
        let (_dir, repo) = repo();
        run(&repo).unwrap();
        assert!(repo.is_initialized());

        let head = repo.store().read_head().unwrap();
        assert_eq!(head.current_branch(), DEFAULT_BRANCH);

        let commit = repo
            .store()
            .get_commit(head.head_commit().as_str())
            .unwrap()
            .unwrap();
        assert_eq!(commit.message(), crate::model::commit::INITIAL_COMMIT_MESSAGE);
        assert!(commit.tree().is_empty());
    }

    #[test]
    fn init_twice_fails() {
        let (_dir, repo) = repo();
        run(&repo).unwrap();
        assert!(matches!(run(&repo), Err(GitletError::AlreadyInitialized)));
    }

    #[test]
    fn init_leaves_empty_staging_area() {
        let (_dir, repo) = repo();
        run(&repo).unwrap();
        assert!(repo.store().read_staging().unwrap().is_empty());
    }

    #[test]
    fn init_writes_default_config_file() {
        let (dir, repo) = repo();
        run(&repo).unwrap();
        let config_path = dir.path().join(".gitlet").join("config");
        assert!(config_path.is_file());
        let loaded = crate::config::GitletConfig::load(&config_path).unwrap();
        assert_eq!(loaded, crate::config::GitletConfig::default());
    }
}
