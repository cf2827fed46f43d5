//! Serde structures for the third-party links manifest.

use serde::Deserialize;
use std::fmt;

/// Top-level manifest document: an ordered list of known third-party files.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub files: Vec<ManifestRecord>,
}

/// One known third-party file and where to download it from.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestRecord {
    pub name: String,
    pub version: VersionField,
    pub arch: String,
    #[serde(rename = "downloadLink")]
    pub download_link: String,
}

/// Manifest version value, which upstream encodes as either a JSON string
/// or a JSON number (`"1.0"` and `1.0` both occur in the wild).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VersionField {
    Text(String),
    Number(serde_json::Number),
}

impl VersionField {
    /// Loose equality against a string-typed lookup key: both sides are
    /// coerced to their string form before comparing, so numeric `1.0`
    /// matches the key `"1.0"`.
    pub fn matches_key(&self, key: &str) -> bool {
        match self {
            VersionField::Text(s) => s == key,
            VersionField::Number(n) => n.to_string() == key,
        }
    }
}

impl fmt::Display for VersionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionField::Text(s) => f.write_str(s),
            VersionField::Number(n) => write!(f, "{n}"),
        }
    }
}
