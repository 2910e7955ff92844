//! CLI integration tests using the real slipfind binary
//!
//! The process contract under test: failures never write to stdout,
//! diagnostics go to stderr, and the exit status is non-zero.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

use common::{TestRepo, write_pipeline_config};

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
fn slipfind_cmd() -> Command {
    let mut cmd = Command::cargo_bin("slipfind").expect("binary built");
    // Isolate from the ambient environment so host configuration never
    // leaks into assertions.
    for var in [
        "SLIPFIND_VAULT_PATH",
        "SLIPFIND_VAULT_MOUNT",
        "SLIPFIND_PIPELINE_CONFIG",
        "SLIPFIND_STORE_URL",
        "VAULT_ADDR",
        "VAULT_TOKEN",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_output() {
    slipfind_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("routing slips"))
        .stdout(predicate::str::contains("--depth"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_version_output() {
    slipfind_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("slipfind"));
}

#[test]
fn test_no_config_fails_with_required_message() {
    let (repo, _ids) = TestRepo::with_commits(1, "https://github.com/acme/widget.git");

    slipfind_cmd()
        .current_dir(&repo.path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Pipeline configuration required"))
        .stderr(predicate::str::contains("SLIPFIND_VAULT_PATH"))
        .stderr(predicate::str::contains("SLIPFIND_PIPELINE_CONFIG"));
}

#[test]
fn test_missing_pipeline_config_file() {
    let (repo, _ids) = TestRepo::with_commits(1, "https://github.com/acme/widget.git");

    slipfind_cmd()
        .current_dir(&repo.path)
        .env("SLIPFIND_PIPELINE_CONFIG", "/nonexistent/pipeline.json")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Pipeline configuration file not found",
        ));
}

#[test]
fn test_invalid_pipeline_config_file() {
    let (repo, _ids) = TestRepo::with_commits(1, "https://github.com/acme/widget.git");
    let config_path = repo.path.join("pipeline.json");
    std::fs::write(&config_path, "{broken").expect("write config");

    slipfind_cmd()
        .current_dir(&repo.path)
        .env("SLIPFIND_PIPELINE_CONFIG", &config_path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not valid"));
}

#[test]
fn test_secret_locator_failure_does_not_fall_back_to_file() {
    // Both sources configured: the locator wins, and its failure (no
    // VAULT_ADDR) is a hard error even though the file is valid.
    let (repo, _ids) = TestRepo::with_commits(1, "https://github.com/acme/widget.git");
    let config_path = write_pipeline_config(&repo.path);

    slipfind_cmd()
        .current_dir(&repo.path)
        .env("SLIPFIND_VAULT_PATH", "ci/app/pipeline#config")
        .env("SLIPFIND_PIPELINE_CONFIG", &config_path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Secret source unavailable"));
}

#[test]
fn test_store_endpoint_required() {
    let (repo, _ids) = TestRepo::with_commits(1, "https://github.com/acme/widget.git");
    let config_path = write_pipeline_config(&repo.path);

    slipfind_cmd()
        .current_dir(&repo.path)
        .env("SLIPFIND_PIPELINE_CONFIG", &config_path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("SLIPFIND_STORE_URL"));
}

#[test]
fn test_not_a_git_repository() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let config_path = write_pipeline_config(temp.path());

    slipfind_cmd()
        .current_dir(temp.path())
        .env("SLIPFIND_PIPELINE_CONFIG", &config_path)
        .env("SLIPFIND_STORE_URL", "http://127.0.0.1:1")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Not a git repository"));
}

#[test]
fn test_unreachable_store_fails_with_clean_stdout() {
    let (repo, _ids) = TestRepo::with_commits(3, "https://github.com/acme/widget.git");
    let config_path = write_pipeline_config(&repo.path);

    // Port 1 on loopback: connection refused, no network dependency.
    slipfind_cmd()
        .current_dir(&repo.path)
        .env("SLIPFIND_PIPELINE_CONFIG", &config_path)
        .env("SLIPFIND_STORE_URL", "http://127.0.0.1:1")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Slip store query failed"));
}

#[test]
fn test_missing_origin_remote() {
    let repo = TestRepo::empty();
    repo.commit_chain(2);
    let config_path = write_pipeline_config(&repo.path);

    slipfind_cmd()
        .current_dir(&repo.path)
        .env("SLIPFIND_PIPELINE_CONFIG", &config_path)
        .env("SLIPFIND_STORE_URL", "http://127.0.0.1:1")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("origin"));
}
