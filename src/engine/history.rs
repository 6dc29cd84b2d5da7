//! `log` / `global-log` / `find` — the commit history walker.

use chrono::{TimeZone, Utc};

use crate::error::GitletError;
use crate::model::{Commit, CommitId};

use super::Repo;

/// Follow the `parent1` chain from HEAD, newest first.
pub fn log(repo: &Repo) -> Result<String, GitletError> {
    repo.require_initialized()?;
    let (head, mut commit) = repo.head_commit()?;
    let mut ids = vec![head.head_commit().clone()];
    let mut commits = vec![commit.clone()];

    while let Some(parent_id) = commit.parent1() {
        let parent_id = parent_id.clone();
        commit = repo
            .store()
            .get_commit(parent_id.as_str())?
            .ok_or_else(|| GitletError::Internal(format!("commit {parent_id} has missing parent")))?;
        ids.push(parent_id);
        commits.push(commit.clone());
    }

    Ok(render_entries(ids.iter().zip(commits.iter())))
}

/// Every stored commit, in no particular order.
pub fn global_log(repo: &Repo) -> Result<String, GitletError> {
    repo.require_initialized()?;
    let ids = repo.store().list_commits()?;
    let mut pairs = Vec::with_capacity(ids.len());
    for id in &ids {
        let commit = repo
            .store()
            .get_commit(id.as_str())?
            .ok_or_else(|| GitletError::Internal(format!("listed commit {id} vanished")))?;
        pairs.push((id.clone(), commit));
    }
    Ok(render_entries(pairs.iter().map(|(id, commit)| (id, commit))))
}

/// List the ids of every commit whose message equals `message` exactly.
///
/// # Errors
/// Returns [`GitletError::NoCommitWithThatMessage`] if none match.
pub fn find(repo: &Repo, message: &str) -> Result<Vec<CommitId>, GitletError> {
    repo.require_initialized()?;
    let mut matches = Vec::new();
    for id in repo.store().list_commits()? {
        let commit = repo
            .store()
            .get_commit(id.as_str())?
            .ok_or_else(|| GitletError::Internal(format!("listed commit {id} vanished")))?;
        if commit.message() == message {
            matches.push(id);
        }
    }
    if matches.is_empty() {
        return Err(GitletError::NoCommitWithThatMessage);
    }
    Ok(matches)
}

fn render_entries<'a>(entries: impl Iterator<Item = (&'a CommitId, &'a Commit)>) -> String {
    let mut out = String::new();
    let mut first = true;
    for (id, commit) in entries {
        if !first {
            out.push('\n');
        }
        first = false;
        out.push_str(&render_entry(id, commit));
    }
    out
}

fn render_entry(id: &CommitId, commit: &Commit) -> String {
    let mut out = String::new();
    out.push_str("===\n");
    out.push_str(&format!("commit {id}\n"));
    if let Some(parent2) = commit.parent2() {
        let parent1 = commit.parent1().map(CommitId::short).unwrap_or_default();
        out.push_str(&format!("Merge: {} {}\n", parent1, parent2.short()));
    }
    out.push_str(&format!("Date: {}\n", format_date(commit.timestamp())));
    out.push_str(commit.message());
    out.push('\n');
    out
}

/// Render a Unix timestamp in the fixed `log` date format, e.g.
/// `Thu Jan 1 00:00:00 1970 +0000`.
fn format_date(timestamp: i64) -> String {
    let datetime = Utc.timestamp_opt(timestamp, 0).single().unwrap_or_else(|| {
        Utc.timestamp_opt(0, 0)
            .single()
            .expect("epoch is always a valid timestamp")
    });
    datetime.format("%a %b %-d %H:%M:%S %Y %z").to_string()
}
