//! Remote URL parsing
//!
//! Extracts the canonical `owner/name` from a git remote URL. Two
//! shapes are supported:
//! - HTTPS: `https://host/owner/name[.git]`
//! - SCP-style SSH: `user@host:owner/name[.git]`

use crate::error::{Result, SlipfindError};

/// Parse `owner/name` from a git remote URL.
///
/// Leading/trailing whitespace is trimmed and a trailing `.git` suffix
/// is stripped. Any URL not matching the supported shapes yields
/// [`SlipfindError::InvalidRemoteUrl`].
pub fn parse_repo_name(url: &str) -> Result<String> {
    let trimmed = url.trim();

    if let Some(rest) = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
    {
        // host/owner/name
        let mut segments = rest.splitn(2, '/');
        let host = segments.next().unwrap_or_default();
        let path = segments.next().unwrap_or_default();
        if !host.is_empty() {
            if let Some(name) = split_owner_name(path) {
                return Ok(name);
            }
        }
    } else if let Some(name) = parse_scp_style(trimmed) {
        return Ok(name);
    }

    Err(SlipfindError::InvalidRemoteUrl {
        url: trimmed.to_string(),
    })
}

/// Parse SCP-style `user@host:owner/name` URLs.
///
/// `ssh://` URLs use a different path layout and are not SCP-style;
/// they are rejected here, as are URLs with any other explicit scheme.
fn parse_scp_style(url: &str) -> Option<String> {
    if url.contains("://") {
        return None;
    }

    let at = url.find('@')?;
    let rest = &url[at + 1..];
    let colon = rest.find(':')?;
    let host = &rest[..colon];
    if at == 0 || host.is_empty() {
        return None;
    }

    split_owner_name(&rest[colon + 1..])
}

/// Split a `owner/name[.git]` path into the canonical repository name.
///
/// Exactly two non-empty segments are required.
fn split_owner_name(path: &str) -> Option<String> {
    let path = path.strip_suffix(".git").unwrap_or(path);
    let mut parts = path.split('/');
    let owner = parts.next()?;
    let name = parts.next()?;
    if owner.is_empty() || name.is_empty() || parts.next().is_some() {
        return None;
    }
    Some(format!("{owner}/{name}"))
}
