//! Repository directory layout (`.gitlet/`).
//!
//! A plain configuration record threaded through the engine rather than a
//! global singleton — this is what lets every engine operation run against
//! an arbitrary temp directory in tests.

use std::path::{Path, PathBuf};

/// The on-disk layout of one Gitlet repository, rooted at the working
/// directory that contains `.gitlet/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoPaths {
    working_dir: PathBuf,
}

impl RepoPaths {
    /// Root the layout at `working_dir` (the directory containing, or that
    /// will contain, `.gitlet/`).
    #[must_use]
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// The working directory `.gitlet` lives under.
    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// `.gitlet/`
    #[must_use]
    pub fn gitlet_dir(&self) -> PathBuf {
        self.working_dir.join(".gitlet")
    }

    /// `.gitlet/commits/`
    #[must_use]
    pub fn commits_dir(&self) -> PathBuf {
        self.gitlet_dir().join("commits")
    }

    /// `.gitlet/blobs/`
    #[must_use]
    pub fn blobs_dir(&self) -> PathBuf {
        self.gitlet_dir().join("blobs")
    }

    /// `.gitlet/branches/`
    #[must_use]
    pub fn branches_dir(&self) -> PathBuf {
        self.gitlet_dir().join("branches")
    }

    /// `.gitlet/repo` — the serialized HEAD.
    #[must_use]
    pub fn head_file(&self) -> PathBuf {
        self.gitlet_dir().join("repo")
    }

    /// `.gitlet/stagingArea`
    #[must_use]
    pub fn staging_file(&self) -> PathBuf {
        self.gitlet_dir().join("stagingArea")
    }

    /// `.gitlet/config`
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.gitlet_dir().join("config")
    }

    /// Whether `.gitlet/` already exists at this root.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.gitlet_dir().is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_rooted_under_gitlet_dir() {
        let paths = RepoPaths::new(PathBuf::from("/repo"));
        assert_eq!(paths.gitlet_dir(), PathBuf::from("/repo/.gitlet"));
        assert_eq!(paths.commits_dir(), PathBuf::from("/repo/.gitlet/commits"));
        assert_eq!(paths.blobs_dir(), PathBuf::from("/repo/.gitlet/blobs"));
        assert_eq!(paths.branches_dir(), PathBuf::from("/repo/.gitlet/branches"));
        assert_eq!(paths.head_file(), PathBuf::from("/repo/.gitlet/repo"));
        assert_eq!(paths.staging_file(), PathBuf::from("/repo/.gitlet/stagingArea"));
        assert_eq!(paths.config_file(), PathBuf::from("/repo/.gitlet/config"));
    }

    #[test]
    fn not_initialized_without_gitlet_dir() {
        let dir = tempfile::tempdir().unwrap();
        let paths = RepoPaths::new(dir.path().to_path_buf());
        assert!(!paths.is_initialized());
        std::fs::create_dir(paths.gitlet_dir()).unwrap();
        assert!(paths.is_initialized());
    }
}
