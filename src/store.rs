//! Slip store access
//!
//! The store is a key-value lookup service queried once per resolve
//! with the repository name and the full candidate commit list. It
//! answers with a slip and the commit that matched, or an explicit
//! "no match" — which is an expected outcome, not an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PipelineConfig;
use crate::error::{Result, SlipfindError};

/// A routing slip record returned by the store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slip {
    /// Correlation identifier carried by the slip
    pub correlation_id: String,
}

/// Lookup access to the slip store
pub trait SlipStore {
    /// Search for a slip matching any of the given commits.
    ///
    /// Returns the slip and the commit id that matched, or `None` when
    /// no slip is recorded for any candidate.
    fn find_by_commits(
        &self,
        repository: &str,
        commits: &[String],
    ) -> Result<Option<(Slip, String)>>;

    /// Release any resources held by the store
    fn close(&self) -> Result<()>;
}

/// HTTP-backed slip store client
pub struct HttpSlipStore {
    http: reqwest::blocking::Client,
    endpoint: String,
    pipeline: String,
}

#[derive(Serialize)]
struct FindRequest<'a> {
    repository: &'a str,
    commits: &'a [String],
    pipeline: &'a str,
}

#[derive(Deserialize)]
struct FindResponse {
    slip: Option<Slip>,
    #[serde(default)]
    matched_commit: String,
}

impl HttpSlipStore {
    /// Build a store client for the given endpoint, scoped to the
    /// pipeline named by the resolved definition.
    pub fn new(endpoint: &str, pipeline: &PipelineConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| SlipfindError::StoreQueryFailed {
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            pipeline: pipeline.name.clone(),
        })
    }
}

impl SlipStore for HttpSlipStore {
    fn find_by_commits(
        &self,
        repository: &str,
        commits: &[String],
    ) -> Result<Option<(Slip, String)>> {
        let url = format!("{}/api/v1/slips/find", self.endpoint);
        debug!(
            repository,
            candidates = commits.len(),
            pipeline = %self.pipeline,
            "querying slip store"
        );

        let response = self
            .http
            .post(&url)
            .json(&FindRequest {
                repository,
                commits,
                pipeline: &self.pipeline,
            })
            .send()
            .map_err(|e| SlipfindError::StoreQueryFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SlipfindError::StoreQueryFailed {
                reason: format!("store returned status {status}"),
            });
        }

        let body: FindResponse =
            response
                .json()
                .map_err(|e| SlipfindError::StoreQueryFailed {
                    reason: format!("unexpected response shape: {e}"),
                })?;

        match body.slip {
            Some(slip) => Ok(Some((slip, body.matched_commit))),
            None => Ok(None),
        }
    }

    fn close(&self) -> Result<()> {
        // reqwest pools connections internally; nothing to release.
        Ok(())
    }
}
