use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_PREFIX: &str = "chub-search";

/// Global configuration loaded from `~/.config/chub-search/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChubConfig {
    /// Paginated/filtered character search (GET).
    pub search_endpoint: String,
    /// Tag list used for autocomplete (POST with an empty JSON body).
    pub tags_endpoint: String,
    /// Base of the public character pages; detail links are `<site_url>/characters/<full_path>`.
    pub site_url: String,
    /// Delay before a burst of search triggers collapses into one request.
    pub debounce_ms: u64,
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout for any single request.
    pub timeout_secs: u64,
    /// Where downloaded cards are written by the terminal importer (None = current dir).
    pub download_dir: Option<PathBuf>,
}

impl Default for ChubConfig {
    fn default() -> Self {
        Self {
            search_endpoint: "https://api.chub.ai/search".to_string(),
            tags_endpoint: "https://api.chub.ai/tags".to_string(),
            site_url: "https://chub.ai".to_string(),
            debounce_ms: 750,
            connect_timeout_secs: 15,
            timeout_secs: 30,
            download_dir: None,
        }
    }
}

impl ChubConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Path of the host settings file (one TOML table per extension namespace).
pub fn settings_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.place_config_file("extension_settings.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ChubConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<ChubConfig> {
    if !path.exists() {
        let default_cfg = ChubConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: ChubConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
