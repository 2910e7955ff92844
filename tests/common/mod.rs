//! Common test utilities for slipfind integration tests

use std::path::PathBuf;

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

/// A throwaway git checkout for integration tests
#[allow(dead_code)]
pub struct TestRepo {
    /// Temporary directory holding the checkout
    pub temp: TempDir,
    /// Path to the checkout root
    pub path: PathBuf,
    repo: Repository,
}

#[allow(dead_code)]
impl TestRepo {
    /// Create an empty repository (no commits)
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let repo = Repository::init(&path).expect("Failed to init git repository");
        Self { temp, path, repo }
    }

    /// Create a repository with `n` linear commits and an origin remote.
    ///
    /// Returns the repo and the commit ids head-first.
    pub fn with_commits(n: usize, origin_url: &str) -> (Self, Vec<String>) {
        let test_repo = Self::empty();
        let ids = test_repo.commit_chain(n);
        test_repo
            .repo
            .remote("origin", origin_url)
            .expect("Failed to add origin remote");
        (test_repo, ids)
    }

    /// Add `n` linear commits on the current branch, returned head-first
    pub fn commit_chain(&self, n: usize) -> Vec<String> {
        let sig = Signature::now("Test", "test@test.com").expect("Failed to create signature");
        let mut ids: Vec<String> = Vec::with_capacity(n);
        let mut parent: Option<Oid> = None;

        for i in 0..n {
            let tree_id = {
                let mut index = self.repo.index().expect("Failed to open index");
                index.write_tree().expect("Failed to write tree")
            };
            let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");
            let parents: Vec<git2::Commit> = parent
                .into_iter()
                .map(|id| self.repo.find_commit(id).expect("Failed to find parent"))
                .collect();
            let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

            let oid = self
                .repo
                .commit(
                    Some("HEAD"),
                    &sig,
                    &sig,
                    &format!("commit {i}"),
                    &tree,
                    &parent_refs,
                )
                .expect("Failed to create commit");
            ids.push(oid.to_string());
            parent = Some(oid);
        }

        ids.reverse();
        ids
    }
}

/// Write a valid pipeline definition file, returning its path
#[allow(dead_code)]
pub fn write_pipeline_config(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("pipeline.json");
    std::fs::write(
        &path,
        r#"{"version":"1","name":"test-pipeline","steps":[{"name":"push_parsed","description":"Push parsed"}]}"#,
    )
    .expect("Failed to write pipeline config");
    path
}
