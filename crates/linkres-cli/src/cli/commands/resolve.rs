//! `linkres resolve` – resolve a download link from the environment key.

use anyhow::Result;
use linkres_core::config::LinkresConfig;
use linkres_core::manifest::Manifest;
use linkres_core::resolver::{self, LookupKey};
use std::path::Path;

/// Load the manifest, build the lookup key from the environment, and print
/// the first matching download link. No match prints nothing and still
/// succeeds; only a missing or malformed manifest is an error.
pub fn run_resolve(cli_manifest: Option<&Path>, cfg: &LinkresConfig) -> Result<()> {
    let path = super::manifest_location(cli_manifest, cfg);
    let manifest = Manifest::load(&path)?;
    let key = LookupKey::from_env();

    match resolver::resolve(&manifest, &key) {
        Some(link) => println!("{link}"),
        None => tracing::info!("no manifest record matches key {:?}", key),
    }

    Ok(())
}
