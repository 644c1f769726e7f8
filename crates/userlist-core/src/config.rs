use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::notify::FAILURE_MESSAGE;

/// Users collection served by the project API when run locally.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/project/api/users/";

/// Id of the list container entries are appended to.
pub const DEFAULT_CONTAINER_ID: &str = "userlist";

/// Global configuration loaded from `~/.config/userlist/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserlistConfig {
    /// Users collection URL (one GET per fetch cycle).
    pub endpoint: String,
    /// Id of the list container on the page.
    #[serde(default = "default_container_id")]
    pub container_id: String,
    /// Alert text shown when a fetch cycle fails.
    #[serde(default = "default_failure_message")]
    pub failure_message: String,
    /// Overall transfer timeout in seconds. None = wait forever.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

fn default_failure_message() -> String {
    FAILURE_MESSAGE.to_string()
}

impl Default for UserlistConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            container_id: default_container_id(),
            failure_message: default_failure_message(),
            request_timeout_secs: None,
        }
    }
}

impl UserlistConfig {
    /// Replace the endpoint (e.g. from `--endpoint`).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Endpoint must be an absolute http(s) URL; container id must be non-empty.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)
            .with_context(|| format!("invalid endpoint URL: {}", self.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("endpoint must be http or https, got {}", url.scheme());
        }
        if self.container_id.trim().is_empty() {
            bail!("container_id must not be empty");
        }
        if self.request_timeout_secs == Some(0) {
            bail!("request_timeout_secs must be positive (omit it to disable the timeout)");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("userlist")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UserlistConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UserlistConfig::default();
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

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<UserlistConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: UserlistConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
