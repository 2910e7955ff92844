//! Secret locator parsing
//!
//! A locator addresses both a secret's storage path and, optionally, a
//! specific key inside it: `path#key`. Secret paths may themselves
//! contain `#`, so the split happens on the last occurrence.

/// Key looked up when the locator names none
pub const DEFAULT_SECRET_KEY: &str = "config";

/// A parsed `path[#key]` secret locator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretLocator {
    /// Storage path of the secret
    pub base_path: String,

    /// Key inside the secret mapping holding the serialized definition
    pub key: String,
}

impl SecretLocator {
    /// Parse a locator string, splitting on the last `#`.
    ///
    /// No `#` yields the default key. A trailing bare `#` yields an
    /// empty key, kept as-is; it simply will not match any key during
    /// lookup.
    #[must_use]
    pub fn parse(locator: &str) -> Self {
        match locator.rfind('#') {
            Some(pos) => Self {
                base_path: locator[..pos].to_string(),
                key: locator[pos + 1..].to_string(),
            },
            None => Self {
                base_path: locator.to_string(),
                key: DEFAULT_SECRET_KEY.to_string(),
            },
        }
    }
}
