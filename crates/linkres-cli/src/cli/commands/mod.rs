//! Subcommand implementations.

mod list;
mod resolve;

use linkres_core::config::{LinkresConfig, DEFAULT_MANIFEST};
use std::path::{Path, PathBuf};

pub use list::run_list;
pub use resolve::run_resolve;

/// Manifest location: CLI override, then config default, then `links.json`
/// in the current directory.
pub(crate) fn manifest_location(cli_override: Option<&Path>, cfg: &LinkresConfig) -> PathBuf {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| cfg.manifest_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST))
}
