//! Configuration service
//!
//! JSON config file at `<config dir>/item-sync/config.json`. Every field is
//! optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use item_sync_provider::{ClientOptions, DEFAULT_BASE_URL};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// Environment variable that overrides `base_url`
pub const BASE_URL_ENV: &str = "ITEM_SYNC_BASE_URL";

/// Config directory of the application
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("item-sync")
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address of the item collection
    pub base_url: String,
    /// UI language code (`en-US`, `pt-BR`)
    pub language: String,
    pub theme: Theme,
    /// Per-request timeout in seconds; none means wait indefinitely
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: Language::default().code().to_string(),
            theme: Theme::Dark,
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Apply `ITEM_SYNC_BASE_URL` when it is set and non-empty
    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            log::info!("Using base URL from {BASE_URL_ENV}");
            self.base_url = url;
        }
    }

    /// Parsed language; unknown codes fall back to English
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language '{}', using en-US", self.language);
            Language::EnUs
        })
    }

    /// HTTP client options derived from this config
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..ClientOptions::default()
        }
    }
}

/// Configuration service trait
pub trait ConfigService: Send + Sync {
    /// Load the configuration
    fn load(&self) -> Result<AppConfig>;

    /// Save the configuration
    fn save(&self, config: &AppConfig) -> Result<()>;

    /// Whether a config file exists yet
    fn exists(&self) -> bool;
}

/// JSON file configuration service
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    /// Service for the default config location
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write config file {}", self.path.display()))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
