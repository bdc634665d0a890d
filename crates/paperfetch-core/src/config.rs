use crate::fetcher::{HttpFetcherOptions, DEFAULT_SUFFIX};
use crate::retry::RetryPolicy;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts per paper (including the first).
    pub max_attempts: u32,
    /// Length of one backoff unit in seconds; waits are 1, 1, 2, 3, 5, ... units.
    pub delay_unit_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: RetryPolicy::DEFAULT_MAX_ATTEMPTS,
            delay_unit_secs: 1.0,
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> Result<RetryPolicy> {
        if self.max_attempts == 0 {
            bail!("retry.max_attempts must be at least 1");
        }
        let unit = Duration::try_from_secs_f64(self.delay_unit_secs)
            .with_context(|| format!("invalid retry.delay_unit_secs {}", self.delay_unit_secs))?;
        Ok(RetryPolicy::new(self.max_attempts).with_delay_unit(unit))
    }
}

/// Global configuration loaded from `~/.config/paperfetch/config.toml`.
/// Missing keys fall back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperfetchConfig {
    /// HTTP base URL papers are fetched from (`<base_url>/<id><suffix>`).
    pub base_url: Option<String>,
    /// Local directory to read papers from instead of HTTP.
    pub source_dir: Option<PathBuf>,
    /// Suffix appended to paper ids.
    pub suffix: String,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    pub retry: Option<RetryConfig>,
}

impl Default for PaperfetchConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            source_dir: None,
            suffix: DEFAULT_SUFFIX.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 60,
            retry: None,
        }
    }
}

impl PaperfetchConfig {
    pub fn retry_policy(&self) -> Result<RetryPolicy> {
        self.retry.clone().unwrap_or_default().policy()
    }

    pub fn http_options(&self) -> HttpFetcherOptions {
        HttpFetcherOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            suffix: self.suffix.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("paperfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PaperfetchConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<PaperfetchConfig> {
    if !path.exists() {
        let default_cfg = PaperfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PaperfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
