//! Repository context derivation
//!
//! Everything the resolver needs to know about the checkout is derived
//! here, once per resolve: head commit, branch (or detached), and the
//! canonical `owner/name` taken from the `origin` remote.

use tracing::{debug, warn};

use crate::error::{Result, SlipfindError};
use crate::repo::RepoAccess;
use crate::repo::url::parse_repo_name;

/// Derived identity of the checkout under resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    /// Full hex commit id of HEAD
    pub head_commit: String,

    /// Current branch name, empty when HEAD is detached
    pub branch: String,

    /// Canonical repository name in `owner/name` form
    pub repository: String,

    /// Whether HEAD is detached (not on a named branch)
    pub is_detached: bool,
}

/// Derive the repository context from the checkout.
///
/// A detached HEAD is a warning, not an error: resolution proceeds with
/// an empty branch name. A missing `origin` remote (or one with no URL)
/// is fatal since the repository name cannot be determined.
pub fn repo_context(repo: &dyn RepoAccess) -> Result<RepoContext> {
    let head_commit = repo.head_commit()?;
    let is_detached = !repo.is_on_branch()?;

    let branch = if is_detached {
        warn!(head = %head_commit, "HEAD is detached; branch name will be empty");
        String::new()
    } else {
        repo.branch_name()?.unwrap_or_default()
    };

    let urls = repo.remote_urls("origin")?;
    let url = urls.first().ok_or(SlipfindError::NoRemoteOrigin)?;
    let repository = parse_repo_name(url)?;

    debug!(
        head = %head_commit,
        branch = %branch,
        repository = %repository,
        is_detached,
        "extracted repository context"
    );

    Ok(RepoContext {
        head_commit,
        branch,
        repository,
        is_detached,
    })
}
