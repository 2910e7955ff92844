//! Pipeline definition parsing
//!
//! The pipeline definition configures the slip store collaborator. It
//! is parsed from raw key-value data and passed through unmodified; the
//! store owns its meaning. Values coming out of the secret source are
//! untyped, so everything goes through a parse-then-validate step that
//! only ever hands out the strongly-typed form.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SlipfindError};

/// Structured pipeline definition (version tag, name, ordered steps)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Definition format version tag
    pub version: String,

    /// Pipeline name
    pub name: String,

    /// Ordered pipeline steps
    pub steps: Vec<PipelineStep>,
}

/// A single named pipeline step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStep {
    /// Step name
    pub name: String,

    /// Human-readable step description
    #[serde(default)]
    pub description: String,
}

impl PipelineConfig {
    /// Parse a definition from its string-encoded JSON form
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| SlipfindError::PipelineConfigInvalid {
            reason: e.to_string(),
        })
    }

    /// Parse a definition from a field-by-field key-value mapping
    pub fn from_mapping(mapping: &serde_json::Map<String, Value>) -> Result<Self> {
        serde_json::from_value(Value::Object(mapping.clone())).map_err(|e| {
            SlipfindError::PipelineConfigInvalid {
                reason: e.to_string(),
            }
        })
    }

    /// Read and parse a definition from a local JSON file.
    ///
    /// A missing file is [`SlipfindError::PipelineConfigNotFound`];
    /// other read failures surface as generic I/O errors.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SlipfindError::PipelineConfigNotFound {
                    path: path.display().to_string(),
                }
            } else {
                SlipfindError::IoError {
                    message: format!("failed to read pipeline config {}: {e}", path.display()),
                }
            }
        })?;
        Self::from_json(&data)
    }
}
