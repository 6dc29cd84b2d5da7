//! `add <file>` — stage a working-directory file for the next commit.

use crate::error::GitletError;

use super::{wd, Repo};

/// Stage `path`.
///
/// If `path`'s current content already matches what HEAD has recorded for
/// it, no staging is needed: any previously staged addition *or removal*
/// for the same path is dropped instead (mirrors undoing an add, or a
/// prior `rm`, that's now a no-op).
///
/// # Errors
/// Returns [`GitletError::NoSuchFile`] if `path` does not exist in the
/// working directory.
pub fn run(repo: &Repo, path: &str) -> Result<(), GitletError> {
    repo.require_initialized()?;
    if !wd::file_exists(repo.working_dir(), path) {
        return Err(GitletError::NoSuchFile);
    }

    let content = wd::read_file(repo.working_dir(), path)?;
    let blob_id = repo.store().put_blob(content)?;

    let (_head, commit) = repo.head_commit()?;
    let mut staging = repo.store().read_staging()?;

    if commit.tree().get(path) == Some(&blob_id) {
        staging.unstage_addition(path);
        staging.unstage_removal(path);
    } else {
        staging.stage_addition(path.to_owned(), blob_id);
    }

    repo.store().write_staging(&staging)
}
