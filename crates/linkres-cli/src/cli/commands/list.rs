//! `linkres list` – print every record in the manifest.

use anyhow::Result;
use linkres_core::config::LinkresConfig;
use linkres_core::manifest::Manifest;
use std::path::Path;

pub fn run_list(cli_manifest: Option<&Path>, cfg: &LinkresConfig) -> Result<()> {
    let path = super::manifest_location(cli_manifest, cfg);
    let manifest = Manifest::load(&path)?;

    for record in &manifest.files {
        println!(
            "{} {} {} {}",
            record.name, record.version, record.arch, record.download_link
        );
    }

    Ok(())
}
