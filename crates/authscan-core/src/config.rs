use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides `api_base_url` after the file is loaded.
pub const API_URL_ENV: &str = "AUTHSCAN_API_URL";

/// Global configuration loaded from `~/.config/authscan/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthscanConfig {
    /// Base URL of the detector service; `/analyze` is joined onto it.
    pub api_base_url: String,
    /// Whole-request deadline in seconds. Slow sites need the full minute.
    pub timeout_secs: u64,
    /// Connect-phase deadline in seconds.
    pub connect_timeout_secs: u64,
    /// Ask the detector for its agent-assisted mode.
    #[serde(default)]
    pub use_agents: bool,
}

impl Default for AuthscanConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            timeout_secs: 60,
            connect_timeout_secs: 15,
            use_agents: false,
        }
    }
}

impl AuthscanConfig {
    /// Overall deadline. Zero would mean "no deadline" to libcurl, so it is
    /// raised to one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Connect deadline, never longer than the overall deadline and never zero.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.clamp(1, self.timeout_secs.max(1)))
    }

    /// Replace `api_base_url` with `value` when it is set and non-empty.
    pub fn apply_api_url_override(&mut self, value: Option<&str>) {
        if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.api_base_url = v.to_string();
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("authscan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// `AUTHSCAN_API_URL` is applied on top of whatever was loaded.
pub fn load_or_init() -> Result<AuthscanConfig> {
    let path = config_path()?;
    let mut cfg = load_or_init_at(&path)?;
    cfg.apply_api_url_override(std::env::var(API_URL_ENV).ok().as_deref());
    Ok(cfg)
}

/// Like `load_or_init` but at an explicit path and without the environment override.
pub fn load_or_init_at(path: &Path) -> Result<AuthscanConfig> {
    if !path.exists() {
        let default_cfg = AuthscanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AuthscanConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
