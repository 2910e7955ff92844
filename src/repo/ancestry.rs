//! First-parent ancestry walk
//!
//! Commits are collected head-first by repeatedly following the first
//! parent only. Merge commits interleave history from other branches;
//! following a non-first parent could surface a slip recorded for an
//! unrelated branch, so secondary parents are never visited.

use tracing::debug;

use crate::cancel::CancelToken;
use crate::error::{Result, SlipfindError};
use crate::repo::RepoAccess;

/// Walk commit ancestry from HEAD, first parent only.
///
/// Returns at most `depth` commit ids, newest first. The walk is
/// bounded by `depth` even if a corrupt repository reports a
/// self-referential parent. Cancellation is polled before each commit
/// is appended; once it fires the whole walk fails, never returning a
/// partial sequence.
pub fn walk_ancestry(
    repo: &dyn RepoAccess,
    depth: usize,
    cancel: &CancelToken,
) -> Result<Vec<String>> {
    let mut commits = Vec::new();
    let mut current = Some(repo.head_commit()?);

    while let Some(id) = current {
        if cancel.is_cancelled() {
            return Err(SlipfindError::Cancelled);
        }

        commits.push(id.clone());
        if commits.len() >= depth {
            break;
        }
        current = repo.parent_of(&id)?;
    }

    // HEAD always yields at least one commit; guards degenerate states.
    if commits.is_empty() {
        return Err(SlipfindError::EmptyAncestry);
    }

    debug!(
        depth_requested = depth,
        commits_found = commits.len(),
        head = %commits[0],
        oldest = %commits[commits.len() - 1],
        "walked commit ancestry"
    );

    Ok(commits)
}
