use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Manifest file name used when neither the CLI nor the config names one.
pub const DEFAULT_MANIFEST: &str = "links.json";

/// Global configuration loaded from `~/.config/linkres/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkresConfig {
    /// Default manifest location; `linkres --manifest` overrides it. When
    /// unset, `links.json` in the current directory is used.
    #[serde(default)]
    pub manifest_path: Option<PathBuf>,
}

/// Template written on first run; all settings commented out so the file
/// documents itself while parsing to the built-in defaults.
const DEFAULT_CONFIG_TEMPLATE: &str = "\
# linkres configuration
#
# Default manifest location; `linkres --manifest` overrides it.
# When unset, links.json in the current directory is used.
# manifest_path = \"/srv/links.json\"
";

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkres")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkresConfig> {
    let path = config_path()?;
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(LinkresConfig::default());
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LinkresConfig = toml::from_str(&data)?;
    Ok(cfg)
}
