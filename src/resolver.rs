//! Slip resolution orchestration
//!
//! One resolve call runs a strict linear sequence: derive repository
//! context, walk first-parent ancestry, query the store once with the
//! full candidate list. There is no retry, no caching, and no partial
//! success; every failure is fatal to the call.

use tracing::{info, warn};

use crate::cancel::CancelToken;
use crate::error::{Result, SlipfindError};
use crate::repo::{RepoAccess, repo_context, walk_ancestry};
use crate::store::SlipStore;

/// Default number of commits to walk when searching for slips
pub const DEFAULT_ANCESTRY_DEPTH: i64 = 25;

/// The only resolution strategy this engine supports
pub const RESOLVED_BY_ANCESTRY: &str = "ancestry";

/// Parameters for a resolve call
#[derive(Debug, Clone, Copy)]
pub struct ResolveInput {
    /// Maximum ancestry depth; values ≤ 0 fall back to the default
    pub depth: i64,
}

/// Result of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOutput {
    /// Correlation identifier of the resolved slip
    pub correlation_id: String,

    /// Commit id that matched in the store; may differ from head
    pub matched_commit: String,

    /// Repository name in `owner/name` form
    pub repository: String,

    /// Branch name at resolution time, empty when detached
    pub branch: String,

    /// How the slip was resolved
    pub resolved_by: &'static str,
}

/// Resolves routing slips from local commit ancestry
pub struct SlipResolver<'a> {
    repo: &'a dyn RepoAccess,
    store: &'a dyn SlipStore,
    cancel: &'a CancelToken,
}

impl<'a> SlipResolver<'a> {
    /// Create a resolver over the given collaborators
    pub fn new(repo: &'a dyn RepoAccess, store: &'a dyn SlipStore, cancel: &'a CancelToken) -> Self {
        Self {
            repo,
            store,
            cancel,
        }
    }

    /// Find the slip matching the checkout's commit ancestry.
    ///
    /// Returns [`SlipfindError::NoAncestorSlip`] when the store reports
    /// no match for any candidate commit; that is the expected outcome
    /// for a repository with no recorded slip in reachable history.
    pub fn resolve(&self, input: ResolveInput) -> Result<ResolveOutput> {
        let depth = normalize_depth(input.depth);
        info!(depth, "starting slip resolution");

        let ctx = repo_context(self.repo)?;
        info!(
            repository = %ctx.repository,
            branch = %ctx.branch,
            head = %ctx.head_commit,
            is_detached = ctx.is_detached,
            "extracted repository context"
        );

        let commits = walk_ancestry(self.repo, depth, self.cancel)?;

        let found = self.store.find_by_commits(&ctx.repository, &commits)?;

        let Some((slip, matched_commit)) = found else {
            warn!(
                repository = %ctx.repository,
                commits_searched = commits.len(),
                head = %ctx.head_commit,
                "no slip found in commit ancestry"
            );
            return Err(SlipfindError::NoAncestorSlip {
                commits_searched: commits.len(),
                head: ctx.head_commit,
            });
        };

        info!(
            correlation_id = %slip.correlation_id,
            matched_commit = %matched_commit,
            repository = %ctx.repository,
            resolved_by = RESOLVED_BY_ANCESTRY,
            "slip resolved"
        );

        Ok(ResolveOutput {
            correlation_id: slip.correlation_id,
            matched_commit,
            repository: ctx.repository,
            branch: ctx.branch,
            resolved_by: RESOLVED_BY_ANCESTRY,
        })
    }
}

fn normalize_depth(depth: i64) -> usize {
    let depth = if depth <= 0 {
        DEFAULT_ANCESTRY_DEPTH
    } else {
        depth
    };
    usize::try_from(depth).unwrap_or(DEFAULT_ANCESTRY_DEPTH as usize)
}
