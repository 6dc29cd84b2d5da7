//! Split-point (latest common ancestor) discovery over the commit DAG.

use std::collections::HashMap;

use crate::error::GitletError;
use crate::model::CommitId;

use crate::engine::Repo;

/// Breadth-first depth map from `start`, following both `parent1` and
/// `parent2`. `depth(start) == 0`.
fn depth_map(repo: &Repo, start: &CommitId) -> Result<HashMap<CommitId, usize>, GitletError> {
    let mut depths = HashMap::new();
    let mut frontier = vec![start.clone()];
    depths.insert(start.clone(), 0usize);
    let mut depth = 0usize;

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for id in &frontier {
            let commit = repo
                .store()
                .get_commit(id.as_str())?
                .ok_or_else(|| GitletError::Internal(format!("commit {id} referenced but missing")))?;
            for parent in [commit.parent1(), commit.parent2()].into_iter().flatten() {
                if !depths.contains_key(parent) {
                    depths.insert(parent.clone(), depth + 1);
                    next.push(parent.clone());
                }
            }
        }
        frontier = next;
        depth += 1;
    }

    Ok(depths)
}

/// Find the latest common ancestor of `current` and `other`: the common
/// ancestor with minimum depth on `current`'s side, breaking ties by
/// whichever is reached first in breadth-first order.
pub fn find(repo: &Repo, current: &CommitId, other: &CommitId) -> Result<CommitId, GitletError> {
    let current_depths = depth_map(repo, current)?;
    let other_depths = depth_map(repo, other)?;

    // HashMap iteration order is not deterministic; break ties on depth
    // first, then lexicographically by id, for a stable result.
    current_depths
        .iter()
        .filter(|(id, _)| other_depths.contains_key(*id))
        .min_by(|(id_a, depth_a), (id_b, depth_b)| depth_a.cmp(depth_b).then_with(|| id_a.cmp(id_b)))
        .map(|(id, _)| id.clone())
        .ok_or_else(|| GitletError::Internal("no common ancestor between merge parents".to_owned()))
}
