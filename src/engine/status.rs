//! `status` — the working-tree reconciler and its rendering.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::error::GitletError;
use crate::model::{Blob, Tree};

use super::{wd, Repo};

/// The four ordered file classifications `status` reports, plus the branch
/// list. Pure data — no formatting baked in, so tests can assert on the
/// structure directly.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub branches: Vec<String>,
    pub current_branch: String,
    pub staged: Vec<String>,
    pub removed: Vec<String>,
    pub modifications: Vec<String>,
    pub untracked: Vec<String>,
}

/// Run the full reconciliation: read the working directory, hash content
/// as needed, and compare against HEAD's tree and the staging area.
pub fn run(repo: &Repo) -> Result<Reconciliation, GitletError> {
    repo.require_initialized()?;
    let head = repo.store().read_head()?;
    let (_head, commit) = repo.head_commit()?;
    let staging = repo.store().read_staging()?;
    let wd_files = wd::list_files(repo.working_dir())?;

    let mut branches: Vec<String> = repo.store().list_refs()?.into_iter().collect();
    branches.sort();

    let staged: Vec<String> = staging.additions().keys().cloned().collect();
    let removed: Vec<String> = staging.removals().iter().cloned().collect();

    let mut modifications = BTreeSet::new();
    let mut untracked = BTreeSet::new();

    let mut all_tracked_paths: BTreeSet<&String> = commit.tree().keys().collect();
    all_tracked_paths.extend(staging.additions().keys());

    for path in &all_tracked_paths {
        let path: &str = path.as_str();
        let in_wd = wd_files.contains(path);
        let staged_blob = staging.additions().get(path);
        let head_blob = commit.tree().get(path);

        if in_wd {
            let content = wd::read_file(repo.working_dir(), path)?;
            let blob_id = Blob::new(content).id();
            if let Some(staged_blob) = staged_blob {
                if &blob_id != staged_blob {
                    modifications.insert(format!("{path} (modified)"));
                    continue;
                }
            } else if let Some(head_blob) = head_blob {
                if !staging.is_staged_for_removal(path) && &blob_id != head_blob {
                    modifications.insert(format!("{path} (modified)"));
                    continue;
                }
            }
        } else {
            let staged_for_removal = staging.is_staged_for_removal(path);
            if staged_blob.is_some() && !staged_for_removal {
                modifications.insert(format!("{path} (deleted)"));
                continue;
            }
            if head_blob.is_some() && !staged_for_removal && staged_blob.is_none() {
                modifications.insert(format!("{path} (deleted)"));
                continue;
            }
        }
    }

    for path in &wd_files {
        let tracked_by_head = commit.tree().contains_key(path.as_str());
        let staged_for_addition = staging.is_staged_for_addition(path);
        let staged_for_removal = staging.is_staged_for_removal(path);
        if (!tracked_by_head && !staged_for_addition) || staged_for_removal {
            untracked.insert(path.clone());
        }
    }

    Ok(Reconciliation {
        branches,
        current_branch: head.current_branch().to_owned(),
        staged,
        removed,
        modifications: modifications.into_iter().collect(),
        untracked: untracked.into_iter().collect(),
    })
}

/// Render a [`Reconciliation`] in the exact `status` text format.
#[must_use]
pub fn render(reconciliation: &Reconciliation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Branches ===");
    for branch in &reconciliation.branches {
        if branch == &reconciliation.current_branch {
            let _ = writeln!(out, "*{branch}");
        } else {
            let _ = writeln!(out, "{branch}");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "=== Staged Files ===");
    for name in &reconciliation.staged {
        let _ = writeln!(out, "{name}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "=== Removed Files ===");
    for name in &reconciliation.removed {
        let _ = writeln!(out, "{name}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "=== Modifications Not Staged For Commit ===");
    for entry in &reconciliation.modifications {
        let _ = writeln!(out, "{entry}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "=== Untracked Files ===");
    for name in &reconciliation.untracked {
        let _ = writeln!(out, "{name}");
    }
    let _ = writeln!(out);

    out
}

/// Fail with [`GitletError::UntrackedFileInTheWay`] if any file in the
/// working directory is untracked by `current_tree` but would be
/// overwritten by `target_tree`.
pub fn check_untracked_in_the_way(
    repo: &Repo,
    current_tree: &Tree,
    target_tree: &Tree,
) -> Result<(), GitletError> {
    let wd_files = wd::list_files(repo.working_dir())?;
    for path in &wd_files {
        let tracked_by_current = current_tree.contains_key(path.as_str());
        let overwritten_by_target = target_tree.contains_key(path.as_str());
        if !tracked_by_current && overwritten_by_target {
            return Err(GitletError::UntrackedFileInTheWay);
        }
    }
    Ok(())
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
    fn render_has_expected_section_headers_and_blank_lines() {
        let reconciliation = Reconciliation {
            branches: vec!["master".to_owned()],
            current_branch: "master".to_owned(),
            staged: vec!["a.txt".to_owned()],
            removed: vec![],
            modifications: vec![],
            untracked: vec![],
        };
        let out = render(&reconciliation);
        assert!(out.starts_with("=== Branches ===\n*master\n\n"));
        assert!(out.contains("=== Staged Files ===\na.txt\n\n"));
        assert!(out.contains("=== Removed Files ===\n\n"));
        assert!(out.contains("=== Modifications Not Staged For Commit ===\n\n"));
        assert!(out.ends_with("=== Untracked Files ===\n\n"));
    }

    #[test]
    fn new_file_is_untracked() {
        let (dir, repo) = repo();
        wd::write_file(dir.path(), "a.txt", b"x").unwrap();
        let result = run(&repo).unwrap();
        assert_eq!(result.untracked, vec!["a.txt".to_owned()]);
    }

    #[test]
    fn staged_file_is_reported_staged_not_untracked() {
        let (dir, repo) = repo();
        wd::write_file(dir.path(), "a.txt", b"x").unwrap();
        add::run(&repo, "a.txt").unwrap();
        let result = run(&repo).unwrap();
        assert_eq!(result.staged, vec!["a.txt".to_owned()]);
        assert!(result.untracked.is_empty());
    }

    #[test]
    fn modified_staged_file_reports_modified() {
        let (dir, repo) = repo();
        wd::write_file(dir.path(), "a.txt", b"x").unwrap();
        add::run(&repo, "a.txt").unwrap();
        wd::write_file(dir.path(), "a.txt", b"changed").unwrap();
        let result = run(&repo).unwrap();
        assert_eq!(result.modifications, vec!["a.txt (modified)".to_owned()]);
    }

    #[test]
    fn deleted_staged_file_reports_deleted() {
        let (dir, repo) = repo();
        wd::write_file(dir.path(), "a.txt", b"x").unwrap();
        add::run(&repo, "a.txt").unwrap();
        wd::delete_file(dir.path(), "a.txt").unwrap();
        let result = run(&repo).unwrap();
        assert_eq!(result.modifications, vec!["a.txt (deleted)".to_owned()]);
    }

    #[test]
    fn branches_list_marks_current_with_asterisk() {
        let (_dir, repo) = repo();
        let result = run(&repo).unwrap();
        assert_eq!(result.branches, vec!["master".to_owned()]);
        assert_eq!(result.current_branch, "master");
    }
}
