//! Local git repository access
//!
//! This module handles:
//! - Opening the checkout under resolution
//! - Deriving repository context (head, branch, `owner/name`)
//! - Walking first-parent commit ancestry
//!
//! All reads go through the [`RepoAccess`] trait so the resolver can be
//! exercised against in-memory repositories in tests.

pub mod ancestry;
pub mod context;
pub mod url;

use std::path::{Path, PathBuf};

use git2::Repository;

use crate::error::{Result, SlipfindError};

pub use ancestry::walk_ancestry;
pub use context::{RepoContext, repo_context};

/// Read access to the pieces of a git repository the resolver needs
pub trait RepoAccess {
    /// Full hex id of the commit HEAD points at
    fn head_commit(&self) -> Result<String>;

    /// Whether HEAD points at a named branch
    fn is_on_branch(&self) -> Result<bool>;

    /// Short name of the current branch, `None` when detached
    fn branch_name(&self) -> Result<Option<String>>;

    /// Configured fetch URLs for the named remote
    fn remote_urls(&self, name: &str) -> Result<Vec<String>>;

    /// First parent of the given commit, `None` at a root commit
    fn parent_of(&self, commit: &str) -> Result<Option<String>>;
}

/// A local checkout opened with libgit2
pub struct LocalRepository {
    repo: Repository,
    path: PathBuf,
}

impl std::fmt::Debug for LocalRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalRepository")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl LocalRepository {
    /// Open the repository containing `path`.
    ///
    /// Returns [`SlipfindError::RepositoryNotFound`] if `path` is not
    /// inside a git checkout.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| SlipfindError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;

        Ok(Self {
            repo,
            path: path.to_path_buf(),
        })
    }

    /// Path the repository was opened from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the repository handle.
    ///
    /// libgit2 frees its resources on drop; this exists so callers can
    /// release explicitly and log a failure without masking the resolve
    /// result.
    pub fn close(self) -> Result<()> {
        drop(self.repo);
        Ok(())
    }
}

impl RepoAccess for LocalRepository {
    fn head_commit(&self) -> Result<String> {
        let head = self
            .repo
            .head()
            .map_err(|e| SlipfindError::HeadResolutionFailed {
                reason: e.message().to_string(),
            })?;
        let commit = head
            .peel_to_commit()
            .map_err(|e| SlipfindError::HeadResolutionFailed {
                reason: e.message().to_string(),
            })?;
        Ok(commit.id().to_string())
    }

    fn is_on_branch(&self) -> Result<bool> {
        let head = self
            .repo
            .head()
            .map_err(|e| SlipfindError::HeadResolutionFailed {
                reason: e.message().to_string(),
            })?;
        Ok(head.is_branch())
    }

    fn branch_name(&self) -> Result<Option<String>> {
        let head = self
            .repo
            .head()
            .map_err(|e| SlipfindError::HeadResolutionFailed {
                reason: e.message().to_string(),
            })?;
        if head.is_branch() {
            Ok(head.shorthand().map(ToString::to_string))
        } else {
            Ok(None)
        }
    }

    fn remote_urls(&self, name: &str) -> Result<Vec<String>> {
        let remote = self
            .repo
            .find_remote(name)
            .map_err(|_| SlipfindError::NoRemoteOrigin)?;
        Ok(remote.url().map(ToString::to_string).into_iter().collect())
    }

    fn parent_of(&self, commit: &str) -> Result<Option<String>> {
        let oid = git2::Oid::from_str(commit)?;
        let commit = self.repo.find_commit(oid)?;
        if commit.parent_count() == 0 {
            return Ok(None);
        }
        Ok(Some(commit.parent_id(0)?.to_string()))
    }
}
