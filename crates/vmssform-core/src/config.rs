use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/vmssform/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VmssformConfig {
    /// Default image-type check endpoint. Can be overridden per invocation;
    /// if neither is set, checks are skipped entirely.
    #[serde(default)]
    pub check_url: Option<String>,
    /// Connect timeout for the check request, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout for the check request, in seconds.
    pub request_timeout_secs: u64,
    /// User-Agent header sent with the check request.
    pub user_agent: String,
}

impl Default for VmssformConfig {
    fn default() -> Self {
        Self {
            check_url: None,
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            user_agent: format!("vmssform/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vmssform")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VmssformConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VmssformConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: VmssformConfig = toml::from_str(&data)?;
    Ok(cfg)
}
