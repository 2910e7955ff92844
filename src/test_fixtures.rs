//! Test fixtures for building throwaway git repositories.
//!
//! Unit tests exercise the real libgit2-backed adapter against small
//! repositories built here: linear chains, merges, detached heads.

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

/// Create a temp directory with an initialized (empty) git repository
pub fn init_repo() -> (TempDir, Repository) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let repo = Repository::init(temp.path()).expect("Failed to init git repository");
    (temp, repo)
}

fn signature() -> Signature<'static> {
    Signature::now("Test", "test@test.com").expect("Failed to create signature")
}

fn empty_tree(repo: &Repository) -> git2::Tree<'_> {
    let tree_id = {
        let mut index = repo.index().expect("Failed to open index");
        index.write_tree().expect("Failed to write tree")
    };
    repo.find_tree(tree_id).expect("Failed to find tree")
}

/// Create a commit with the given parents.
///
/// When `update_head` is true the current branch (HEAD) is advanced to
/// the new commit.
pub fn commit_with_parents(
    repo: &Repository,
    message: &str,
    parent_ids: &[Oid],
    update_head: bool,
) -> Oid {
    let sig = signature();
    let tree = empty_tree(repo);
    let parents: Vec<git2::Commit> = parent_ids
        .iter()
        .map(|id| repo.find_commit(*id).expect("Failed to find parent commit"))
        .collect();
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

    repo.commit(
        update_head.then_some("HEAD"),
        &sig,
        &sig,
        message,
        &tree,
        &parent_refs,
    )
    .expect("Failed to create commit")
}

/// Create a linear chain of `n` commits on the current branch.
///
/// Returns commit ids head-first (newest to oldest), matching the
/// ordering the ancestry walk produces.
pub fn commit_chain(repo: &Repository, n: usize) -> Vec<String> {
    let mut ids: Vec<String> = Vec::with_capacity(n);
    let mut parent: Option<Oid> = None;

    for i in 0..n {
        let parents: Vec<Oid> = parent.into_iter().collect();
        let oid = commit_with_parents(repo, &format!("commit {i}"), &parents, true);
        ids.push(oid.to_string());
        parent = Some(oid);
    }

    ids.reverse();
    ids
}

/// Create a commit off `parent` without moving HEAD (a side branch tip)
pub fn side_commit(repo: &Repository, parent: &str, message: &str) -> String {
    let parent_oid = Oid::from_str(parent).expect("Invalid parent id");
    commit_with_parents(repo, message, &[parent_oid], false).to_string()
}

/// Create a merge commit on HEAD with `first` as the first parent
pub fn merge_commit(repo: &Repository, first: &str, second: &str) -> String {
    let first_oid = Oid::from_str(first).expect("Invalid first parent id");
    let second_oid = Oid::from_str(second).expect("Invalid second parent id");
    commit_with_parents(repo, "merge side branch", &[first_oid, second_oid], true).to_string()
}

/// Configure the `origin` remote with the given URL
pub fn set_origin(repo: &Repository, url: &str) {
    repo.remote("origin", url).expect("Failed to add origin remote");
}

/// Detach HEAD at the given commit
pub fn detach_head(repo: &Repository, commit: &str) {
    let oid = Oid::from_str(commit).expect("Invalid commit id");
    repo.set_head_detached(oid).expect("Failed to detach HEAD");
}
