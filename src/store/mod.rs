//! The persistent, content-addressed object store: blobs, commits, branch
//! refs, and the single HEAD slot.
//!
//! Every write goes through [`atomic_write`]: content is written to a
//! sibling temp file and renamed into place, so a crash never leaves a
//! reader observing a partially written object. Within one command, blobs
//! and commits are written before the refs/HEAD that point to them (see
//! [`crate::engine::commit`]), so a crash leaves at worst unreferenced
//! garbage objects, never a dangling ref.

pub mod paths;

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::GitletError;
use crate::model::{Blob, Branch, Commit, CommitId, Head, ObjectId, StagingArea};

pub use paths::RepoPaths;

/// A handle to one repository's persisted state.
pub struct ObjectStore {
    paths: RepoPaths,
}

impl ObjectStore {
    /// Open the object store rooted at `paths`. Does not require `.gitlet`
    /// to already exist — [`ObjectStore::init_layout`] creates it.
    #[must_use]
    pub const fn new(paths: RepoPaths) -> Self {
        Self { paths }
    }

    #[must_use]
    pub const fn paths(&self) -> &RepoPaths {
        &self.paths
    }

    /// Create the `.gitlet/` directory tree. Fails if it already exists.
    pub fn init_layout(&self) -> Result<(), GitletError> {
        fs::create_dir(self.paths.gitlet_dir())?;
        fs::create_dir(self.paths.commits_dir())?;
        fs::create_dir(self.paths.blobs_dir())?;
        fs::create_dir(self.paths.branches_dir())?;
        Ok(())
    }

    // -- Blobs ---------------------------------------------------------

    /// Store `content` as a blob, if not already present. Idempotent.
    pub fn put_blob(&self, content: Vec<u8>) -> Result<crate::model::BlobId, GitletError> {
        let blob = Blob::new(content);
        let id = blob.id();
        let path = self.paths.blobs_dir().join(id.as_str());
        if !path.exists() {
            atomic_write(&path, &bincode::serialize(&blob).map_err(internal_err)?)?;
        }
        Ok(id)
    }

    /// Fetch a blob by its exact id.
    pub fn get_blob(&self, id: &crate::model::BlobId) -> Result<Blob, GitletError> {
        let path = self.paths.blobs_dir().join(id.as_str());
        read_object(&path)
            .ok_or_else(|| GitletError::Internal(format!("missing blob object {id}")))
    }

    // -- Commits ---------------------------------------------------------

    /// Store `commit`, if not already present. Idempotent.
    pub fn put_commit(&self, commit: &Commit) -> Result<CommitId, GitletError> {
        let id = commit.id();
        let path = self.paths.commits_dir().join(id.as_str());
        if !path.exists() {
            atomic_write(&path, &bincode::serialize(commit).map_err(internal_err)?)?;
        }
        Ok(id)
    }

    /// Fetch a commit by exact or abbreviated id.
    ///
    /// A prefix matching zero or more than one stored commit is treated as
    /// not found — an ambiguous abbreviation never silently resolves.
    pub fn get_commit(&self, id_or_prefix: &str) -> Result<Option<Commit>, GitletError> {
        let Some(id) = self.resolve_commit_id(id_or_prefix)? else {
            return Ok(None);
        };
        let path = self.paths.commits_dir().join(id.as_str());
        Ok(read_object(&path))
    }

    /// Resolve a (possibly abbreviated) id to the unique stored [`CommitId`]
    /// it names, or `None` if it names zero or more than one commit.
    pub fn resolve_commit_id(&self, id_or_prefix: &str) -> Result<Option<CommitId>, GitletError> {
        if let Ok(id) = ObjectId::new(id_or_prefix) {
            let full = CommitId::from_object_id(id);
            return Ok(if self.paths.commits_dir().join(full.as_str()).is_file() {
                Some(full)
            } else {
                None
            });
        }

        let mut matches = self
            .list_commits()?
            .into_iter()
            .filter(|id| id.as_object_id().starts_with(id_or_prefix));
        let Some(first) = matches.next() else {
            return Ok(None);
        };
        if matches.next().is_some() {
            return Ok(None); // ambiguous prefix
        }
        Ok(Some(first))
    }

    /// Every stored commit id, in no particular order.
    pub fn list_commits(&self) -> Result<Vec<CommitId>, GitletError> {
        list_file_names(&self.paths.commits_dir())?
            .into_iter()
            .map(|name| {
                ObjectId::new(&name)
                    .map(CommitId::from_object_id)
                    .map_err(|e| GitletError::Internal(e.to_string()))
            })
            .collect()
    }

    // -- Branch refs -----------------------------------------------------

    /// Create or overwrite the branch named `name`.
    pub fn put_ref(&self, branch: &Branch) -> Result<(), GitletError> {
        let path = self.paths.branches_dir().join(branch.name());
        atomic_write(&path, &bincode::serialize(branch).map_err(internal_err)?)
    }

    /// Fetch the branch named `name`, if it exists.
    pub fn get_ref(&self, name: &str) -> Result<Option<Branch>, GitletError> {
        Ok(read_object(&self.paths.branches_dir().join(name)))
    }

    /// Delete the branch named `name`. A no-op if it does not exist.
    pub fn delete_ref(&self, name: &str) -> Result<(), GitletError> {
        let path = self.paths.branches_dir().join(name);
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Every branch name, sorted.
    pub fn list_refs(&self) -> Result<BTreeSet<String>, GitletError> {
        Ok(list_file_names(&self.paths.branches_dir())?
            .into_iter()
            .collect())
    }

    // -- HEAD --------------------------------------------------------------

    /// Read the current HEAD state.
    pub fn read_head(&self) -> Result<Head, GitletError> {
        read_object(&self.paths.head_file())
            .ok_or_else(|| GitletError::Internal("missing HEAD state".to_owned()))
    }

    /// Overwrite the HEAD state.
    pub fn write_head(&self, head: &Head) -> Result<(), GitletError> {
        atomic_write(
            &self.paths.head_file(),
            &bincode::serialize(head).map_err(internal_err)?,
        )
    }

    // -- Staging area --------------------------------------------------------

    /// Read the current staging area.
    pub fn read_staging(&self) -> Result<StagingArea, GitletError> {
        Ok(read_object(&self.paths.staging_file()).unwrap_or_default())
    }

    /// Overwrite the staging area.
    pub fn write_staging(&self, staging: &StagingArea) -> Result<(), GitletError> {
        atomic_write(
            &self.paths.staging_file(),
            &bincode::serialize(staging).map_err(internal_err)?,
        )
    }
}

fn internal_err(err: bincode::Error) -> GitletError {
    GitletError::Internal(err.to_string())
}

/// Write `bytes` to `path` by first writing a sibling temp file, then
/// renaming it into place — readers never observe a partial write.
fn atomic_write(path: &Path, bytes: &[u8]) -> Result<(), GitletError> {
    let dir = path.parent().ok_or_else(|| {
        GitletError::Internal(format!("object path has no parent directory: {}", path.display()))
    })?;
    let mut tmp_name = std::ffi::OsString::from(".tmp-");
    tmp_name.push(path.file_name().unwrap_or_default());
    tmp_name.push(format!("-{}", std::process::id()));
    let tmp_path = dir.join(tmp_name);
    fs::write(&tmp_path, bytes)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn read_object<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let bytes = fs::read(path).ok()?;
    bincode::deserialize(&bytes).ok()
}

/// List the regular file names directly inside `dir` (not full paths,
/// no subdirectories). Returns an empty list if `dir` does not exist.
fn list_file_names(dir: &Path) -> Result<Vec<String>, GitletError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_owned());
            }
        }
    }
    Ok(names)
}
