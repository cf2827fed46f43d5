//! Resolver: match a lookup key against manifest records.
//!
//! The lookup key comes from the process environment. Matching is a linear
//! scan in manifest order; the first record whose three fields all match
//! wins. No match is a normal empty result, not an error.

use crate::manifest::Manifest;

/// Environment variable naming the package to look up.
pub const ENV_NAME: &str = "THIRD_PARTY_NAME";
/// Environment variable naming the version to look up (loosely compared).
pub const ENV_VERSION: &str = "THIRD_PARTY_VERSION";
/// Environment variable naming the architecture to look up.
pub const ENV_ARCH: &str = "ARCH";

/// The `(name, version, arch)` triple used to select a manifest entry.
///
/// Each component may be absent; an absent component never matches any
/// record (it is not a wildcard).
#[derive(Debug, Clone, Default)]
pub struct LookupKey {
    pub name: Option<String>,
    pub version: Option<String>,
    pub arch: Option<String>,
}

impl LookupKey {
    /// Build the key from `THIRD_PARTY_NAME`, `THIRD_PARTY_VERSION` and
    /// `ARCH`. Unset variables stay absent.
    pub fn from_env() -> Self {
        Self {
            name: std::env::var(ENV_NAME).ok(),
            version: std::env::var(ENV_VERSION).ok(),
            arch: std::env::var(ENV_ARCH).ok(),
        }
    }
}

/// Scan `manifest.files` in order and return the download link of the first
/// record matching `key`, or `None` when nothing matches.
///
/// `name` and `arch` compare by exact string equality; `version` compares
/// loosely so a numeric manifest version matches its string spelling.
pub fn resolve<'m>(manifest: &'m Manifest, key: &LookupKey) -> Option<&'m str> {
    let (name, version, arch) = match (&key.name, &key.version, &key.arch) {
        (Some(n), Some(v), Some(a)) => (n, v, a),
        // An absent component can never equal a record field.
        _ => return None,
    };

    manifest
        .files
        .iter()
        .find(|record| {
            record.name == *name && record.arch == *arch && record.version.matches_key(version)
        })
        .map(|record| record.download_link.as_str())
}
