//! The Gitlet engine: one module per command family, all operating over a
//! shared [`Repo`] handle.
//!
//! Every operation here returns `Result<T, GitletError>` rather than
//! printing and exiting directly — the CLI façade in `main.rs` is the only
//! place that turns a `GitletError` into stdout text and an exit code.

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod history;
pub mod init;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
pub mod wd;

use std::path::{Path, PathBuf};

use crate::config::GitletConfig;
use crate::error::GitletError;
use crate::model::{Author, Branch, Commit, CommitId, Head, Tree};
use crate::store::{ObjectStore, RepoPaths};

/// A handle to one repository: the object store plus its working directory
/// and loaded configuration. Threaded through every engine operation in
/// place of global state, so tests can point it at a fresh temp directory.
pub struct Repo {
    store: ObjectStore,
    config: GitletConfig,
}

impl Repo {
    /// Open the repository rooted at `working_dir`. Does not require
    /// `.gitlet` to exist yet — see [`Repo::is_initialized`].
    ///
    /// # Errors
    /// Returns [`GitletError::ConfigError`] if `.gitlet/config` exists but
    /// cannot be parsed.
    pub fn open(working_dir: PathBuf) -> Result<Self, GitletError> {
        let paths = RepoPaths::new(working_dir);
        let config = GitletConfig::load(&paths.config_file()).map_err(|err| {
            GitletError::ConfigError {
                path: err.path.unwrap_or_default(),
                detail: err.message,
            }
        })?;
        Ok(Self {
            store: ObjectStore::new(paths),
            config,
        })
    }

    #[must_use]
    pub const fn store(&self) -> &ObjectStore {
        &self.store
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        self.store.paths().working_dir()
    }

    #[must_use]
    pub const fn config(&self) -> &GitletConfig {
        &self.config
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.store.paths().is_initialized()
    }

    /// Fail with [`GitletError::NotInitialized`] unless `.gitlet` exists.
    pub fn require_initialized(&self) -> Result<(), GitletError> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(GitletError::NotInitialized)
        }
    }

    /// The author identity to attach to new commits, from configuration.
    #[must_use]
    pub fn author(&self) -> Author {
        Author {
            name: self.config.user.name.clone(),
            email: self.config.user.email.clone(),
        }
    }

    /// Read HEAD and resolve it to the current [`Commit`].
    pub fn head_commit(&self) -> Result<(Head, Commit), GitletError> {
        let head = self.store.read_head()?;
        let commit = self
            .store
            .get_commit(head.head_commit().as_str())?
            .ok_or_else(|| {
                GitletError::Internal(format!("HEAD commit {} missing from store", head.head_commit()))
            })?;
        Ok((head, commit))
    }

    /// Resolve the branch ref for the current branch.
    pub fn current_branch_ref(&self) -> Result<Branch, GitletError> {
        let head = self.store.read_head()?;
        self.store
            .get_ref(head.current_branch())
            .and_then(|opt| {
                opt.ok_or_else(|| {
                    GitletError::Internal(format!(
                        "current branch '{}' has no ref entry",
                        head.current_branch()
                    ))
                })
            })
    }

    /// Resolve `id_or_prefix` to a stored commit, mapping an unresolved
    /// lookup to `on_missing`.
    pub fn resolve_commit(
        &self,
        id_or_prefix: &str,
        on_missing: GitletError,
    ) -> Result<(CommitId, Commit), GitletError> {
        let id = self
            .store
            .resolve_commit_id(id_or_prefix)?
            .ok_or_else(|| on_missing_clone(&on_missing))?;
        let commit = self
            .store
            .get_commit(id.as_str())?
            .ok_or_else(|| GitletError::Internal(format!("resolved commit {id} vanished")))?;
        Ok((id, commit))
    }

    /// Advance HEAD and the named branch to `commit_id`, writing the commit
    /// before the ref per the durability ordering in the data model.
    pub fn advance_branch(&self, branch_name: &str, commit_id: CommitId) -> Result<(), GitletError> {
        let mut branch = self
            .store
            .get_ref(branch_name)?
            .unwrap_or_else(|| Branch::new(branch_name.to_owned(), commit_id.clone()));
        branch.set_target(commit_id.clone());
        self.store.put_ref(&branch)?;
        let head = Head::new(branch_name.to_owned(), commit_id);
        self.store.write_head(&head)
    }
}

fn on_missing_clone(err: &GitletError) -> GitletError {
    // `GitletError` is not `Clone` (it wraps `std::io::Error`); engine
    // call sites only ever pass a small fixed set of unit-like variants
    // here, so a `Debug`-derived copy is exact enough for the one error
    // path that needs it.
    match err {
        GitletError::NoSuchCommit => GitletError::NoSuchCommit,
        GitletError::FileNotInCommit => GitletError::FileNotInCommit,
        other => GitletError::Internal(format!("{other}")),
    }
}

/// Unix timestamp (seconds) for "now". A thin wrapper so the rest of the
/// engine never calls `SystemTime::now()` directly.
#[must_use]
pub fn now_unix() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// The new tree after folding `additions`/`removals` over `base`
/// (additions overwrite same-name entries; removals drop them).
#[must_use]
pub fn apply_staging(base: &Tree, additions: &Tree, removals: &std::collections::BTreeSet<String>) -> Tree {
    let mut tree = base.clone();
    for name in removals {
        tree.remove(name);
    }
    for (name, blob) in additions {
        tree.insert(name.clone(), blob.clone());
    }
    tree
}
