//! Pipeline configuration resolution
//!
//! Two mutually exclusive sources, evaluated once at startup:
//! 1. A secret locator (`path[#key]`) addressing the secret source.
//! 2. A local JSON file path.
//!
//! A configured locator wins outright: failures on the secret path are
//! hard errors and never fall through to the file. Only when no locator
//! is configured at all does the file path apply. "Not configured" and
//! "configured but failed" are therefore distinct outcomes, which is
//! the crux of the precedence rule.

pub mod locator;
pub mod pipeline;

use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SlipfindError};
use crate::secret::SecretSource;

pub use locator::{DEFAULT_SECRET_KEY, SecretLocator};
pub use pipeline::{PipelineConfig, PipelineStep};

/// Default KV mount point for the secret source
pub const DEFAULT_SECRET_MOUNT: &str = "secret";

/// Configured pipeline-definition sources
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Secret locator string (`path[#key]`), preferred source
    pub secret_locator: Option<String>,

    /// KV mount point, defaults to `"secret"`
    pub secret_mount: Option<String>,

    /// Local file path, fallback source
    pub file_path: Option<PathBuf>,
}

impl ConfigSources {
    /// Mount point to use, applying the default
    #[must_use]
    pub fn mount(&self) -> &str {
        self.secret_mount.as_deref().unwrap_or(DEFAULT_SECRET_MOUNT)
    }
}

/// Resolve the pipeline definition from the configured sources.
///
/// `make_secrets` constructs the secret source lazily; it is only
/// invoked when a secret locator is configured, so a missing secret
/// backend does not break file-based resolution.
pub fn resolve_pipeline<F>(sources: &ConfigSources, make_secrets: F) -> Result<PipelineConfig>
where
    F: FnOnce() -> Result<Box<dyn SecretSource>>,
{
    if let Some(raw) = sources.secret_locator.as_deref() {
        let locator = SecretLocator::parse(raw);
        debug!(
            path = %locator.base_path,
            key = %locator.key,
            mount = sources.mount(),
            "resolving pipeline config from secret source"
        );
        let secrets = make_secrets()?;
        return from_secret(secrets.as_ref(), &locator, sources.mount());
    }

    if let Some(path) = sources.file_path.as_deref() {
        debug!(path = %path.display(), "resolving pipeline config from local file");
        return PipelineConfig::from_file(path);
    }

    Err(SlipfindError::PipelineConfigRequired)
}

/// Fetch and parse the pipeline definition from the secret source.
///
/// If the mapping holds a string under the locator's key, that string
/// is parsed as the serialized definition. Otherwise the entire mapping
/// is treated as a direct field-by-field encoding. The fallback means a
/// mistyped key still succeeds when the whole secret parses as a valid
/// definition; callers relying on key addressing should keep that in
/// mind when debugging.
pub fn from_secret(
    secrets: &dyn SecretSource,
    locator: &SecretLocator,
    mount: &str,
) -> Result<PipelineConfig> {
    let mapping = secrets.get_mapping(&locator.base_path, mount)?;

    if let Some(Value::String(raw)) = mapping.get(&locator.key) {
        return PipelineConfig::from_json(raw);
    }

    PipelineConfig::from_mapping(&mapping)
}
