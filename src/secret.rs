//! Secret source access
//!
//! The pipeline definition is preferably stored in a Vault KV v2
//! secrets engine. Only the raw key-value mapping is consumed here;
//! parsing and validation happen in the config module.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Result, SlipfindError};

/// A key-value secret backend addressed by path and mount point
pub trait SecretSource {
    /// Fetch the raw key-value mapping stored at `path` under `mount`
    fn get_mapping(&self, path: &str, mount: &str) -> Result<Map<String, Value>>;
}

/// Vault KV v2 client using token authentication
pub struct VaultKv {
    http: reqwest::blocking::Client,
    addr: String,
    token: String,
}

/// KV v2 read response: the secret payload sits under `data.data`
#[derive(Deserialize)]
struct KvReadResponse {
    data: KvReadData,
}

#[derive(Deserialize)]
struct KvReadData {
    data: Map<String, Value>,
}

impl VaultKv {
    /// Build a client from `VAULT_ADDR` and `VAULT_TOKEN`
    pub fn from_env() -> Result<Self> {
        let addr = std::env::var("VAULT_ADDR").map_err(|_| {
            SlipfindError::SecretSourceUnavailable {
                reason: "VAULT_ADDR is not set".to_string(),
            }
        })?;
        let token = std::env::var("VAULT_TOKEN").map_err(|_| {
            SlipfindError::SecretSourceUnavailable {
                reason: "VAULT_TOKEN is not set".to_string(),
            }
        })?;
        Self::new(&addr, &token)
    }

    /// Build a client for the given server address and token
    pub fn new(addr: &str, token: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| SlipfindError::SecretSourceUnavailable {
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            addr: addr.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }
}

impl SecretSource for VaultKv {
    fn get_mapping(&self, path: &str, mount: &str) -> Result<Map<String, Value>> {
        let url = format!("{}/v1/{}/data/{}", self.addr, mount, path);

        let response = self
            .http
            .get(&url)
            .header("X-Vault-Token", &self.token)
            .send()
            .map_err(|e| SlipfindError::SecretSourceUnavailable {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SlipfindError::SecretNotFound {
                path: path.to_string(),
                reason: "secret does not exist".to_string(),
            });
        }
        if !status.is_success() {
            return Err(SlipfindError::SecretNotFound {
                path: path.to_string(),
                reason: format!("secret source returned status {status}"),
            });
        }

        let body: KvReadResponse =
            response
                .json()
                .map_err(|e| SlipfindError::SecretNotFound {
                    path: path.to_string(),
                    reason: format!("unexpected response shape: {e}"),
                })?;

        Ok(body.data.data)
    }
}
