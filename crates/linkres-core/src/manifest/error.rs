//! Error types for manifest loading.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions when loading the manifest. A lookup that finds nothing
/// is deliberately not represented here; no-match is a normal empty result.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be located or read.
    #[error("cannot read manifest {path}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file is not valid JSON with a `files` array.
    #[error("manifest {path} is malformed")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
