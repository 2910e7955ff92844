//! Error types and handling for slipfind
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for slipfind operations
#[derive(Error, Diagnostic, Debug)]
pub enum SlipfindError {
    // Repository errors
    #[error("Not a git repository: {path}")]
    #[diagnostic(
        code(slipfind::repo::not_found),
        help("Run slipfind from inside a git checkout or pass a repository path")
    )]
    RepositoryNotFound { path: String },

    #[error("Failed to resolve HEAD: {reason}")]
    #[diagnostic(code(slipfind::repo::head_failed))]
    HeadResolutionFailed { reason: String },

    #[error("No 'origin' remote configured; cannot determine repository name")]
    #[diagnostic(
        code(slipfind::repo::no_remote_origin),
        help("Add an 'origin' remote with a URL pointing at the hosted repository")
    )]
    NoRemoteOrigin,

    #[error("Could not parse repository name from remote URL: {url}")]
    #[diagnostic(
        code(slipfind::repo::invalid_remote_url),
        help("Supported formats: https://host/owner/repo[.git], git@host:owner/repo[.git]")
    )]
    InvalidRemoteUrl { url: String },

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(slipfind::repo::operation_failed))]
    GitOperationFailed { message: String },

    // Ancestry errors
    #[error("Commit ancestry is empty")]
    #[diagnostic(code(slipfind::ancestry::empty))]
    EmptyAncestry,

    #[error("Operation cancelled")]
    #[diagnostic(code(slipfind::ancestry::cancelled))]
    Cancelled,

    // Resolution errors
    #[error("No slip found in commit ancestry: searched {commits_searched} commits from {head}")]
    #[diagnostic(
        code(slipfind::resolve::no_ancestor_slip),
        help("Increase --depth or verify that a slip was recorded for this repository")
    )]
    NoAncestorSlip {
        commits_searched: usize,
        head: String,
    },

    // Pipeline configuration errors
    #[error(
        "Pipeline configuration required: set SLIPFIND_VAULT_PATH (with VAULT_ADDR and VAULT_TOKEN) or SLIPFIND_PIPELINE_CONFIG for a local file"
    )]
    #[diagnostic(code(slipfind::config::required))]
    PipelineConfigRequired,

    #[error("Pipeline configuration file not found: {path}")]
    #[diagnostic(code(slipfind::config::not_found))]
    PipelineConfigNotFound { path: String },

    #[error("Pipeline configuration is not valid: {reason}")]
    #[diagnostic(
        code(slipfind::config::invalid),
        help("The pipeline definition must be JSON with version, name and steps fields")
    )]
    PipelineConfigInvalid { reason: String },

    // Secret source errors
    #[error("Secret source unavailable: {reason}")]
    #[diagnostic(
        code(slipfind::secret::unavailable),
        help("Check VAULT_ADDR and VAULT_TOKEN")
    )]
    SecretSourceUnavailable { reason: String },

    #[error("Pipeline configuration not found in secret store at path {path}: {reason}")]
    #[diagnostic(code(slipfind::secret::not_found))]
    SecretNotFound { path: String, reason: String },

    // Store errors
    #[error("Slip store endpoint required: set SLIPFIND_STORE_URL")]
    #[diagnostic(code(slipfind::store::endpoint_required))]
    StoreEndpointRequired,

    #[error("Slip store query failed: {reason}")]
    #[diagnostic(code(slipfind::store::query_failed))]
    StoreQueryFailed { reason: String },

    // Output errors
    #[error("Failed to write output: {message}")]
    #[diagnostic(code(slipfind::output::write_failed))]
    OutputWriteFailed { message: String },

    // General errors
    #[error("IO error: {message}")]
    #[diagnostic(code(slipfind::io::error))]
    IoError { message: String },
}

/// Convenience result type for slipfind operations
pub type Result<T> = std::result::Result<T, SlipfindError>;

impl From<std::io::Error> for SlipfindError {
    fn from(err: std::io::Error) -> Self {
        SlipfindError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<git2::Error> for SlipfindError {
    fn from(err: git2::Error) -> Self {
        SlipfindError::GitOperationFailed {
            message: err.message().to_string(),
        }
    }
}
