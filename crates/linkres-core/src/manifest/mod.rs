//! Third-party links manifest: parse the JSON document and load it from disk.
//!
//! The manifest is loaded once per invocation by the entry point and passed
//! by reference to the resolver; there is no process-wide singleton.

mod error;
mod parse;

use std::fs;
use std::path::Path;

pub use error::ManifestError;
pub use parse::{Manifest, ManifestRecord, VersionField};

impl Manifest {
    /// Read and parse the manifest at `path`.
    ///
    /// Read failures map to [`ManifestError::Unavailable`], parse failures
    /// (including a missing or mistyped `files` array) to
    /// [`ManifestError::Malformed`]. Both are fatal to the caller.
    pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
        let bytes = fs::read(path).map_err(|source| ManifestError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Manifest =
            serde_json::from_slice(&bytes).map_err(|source| ManifestError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(
            "loaded manifest {} with {} records",
            path.display(),
            manifest.files.len()
        );
        Ok(manifest)
    }
}
