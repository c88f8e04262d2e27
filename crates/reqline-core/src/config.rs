use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::headers::{AcceptEncoding, HeaderOptions};
use crate::timeout::{ConfigError, Timeout, TimeoutInput};

/// `[timeouts]` section. Each key takes seconds (int or float), a boolean, or
/// `"none"` for no timeout; a missing key means the library default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeoutsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect: Option<TimeoutInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<TimeoutInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<TimeoutInput>,
}

impl TimeoutsConfig {
    /// Validates the section and returns an idle tracker for one attempt.
    pub fn build(&self) -> Result<Timeout, ConfigError> {
        Timeout::from_inputs(self.connect.clone(), self.read.clone(), self.total.clone())
    }
}

/// Global configuration loaded from `~/.config/reqline/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReqlineConfig {
    /// Sent as `user-agent` unless overridden on the command line.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Ask for `connection: keep-alive`.
    #[serde(default)]
    pub keep_alive: bool,
    /// Advertise `gzip,deflate`.
    #[serde(default)]
    pub compress: bool,
    #[serde(default)]
    pub timeouts: TimeoutsConfig,
}

impl Default for ReqlineConfig {
    fn default() -> Self {
        Self {
            user_agent: Some(concat!("reqline/", env!("CARGO_PKG_VERSION")).to_string()),
            keep_alive: false,
            compress: false,
            timeouts: TimeoutsConfig::default(),
        }
    }
}

impl ReqlineConfig {
    /// Header switches implied by this config.
    pub fn header_options(&self) -> HeaderOptions {
        HeaderOptions {
            keep_alive: self.keep_alive,
            accept_encoding: self.compress.then_some(AcceptEncoding::Default),
            user_agent: self.user_agent.clone(),
            basic_auth: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("reqline")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ReqlineConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ReqlineConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path. Timeout values are validated here
/// so a bad file fails at startup rather than on first use.
pub fn load_from(path: &Path) -> Result<ReqlineConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ReqlineConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.timeouts
        .build()
        .with_context(|| format!("invalid [timeouts] in {}", path.display()))?;
    Ok(cfg)
}
