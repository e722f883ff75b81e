// src/config/app_config.rs

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::adapter::pagerduty::events_client::PAGERDUTY_EVENTS_URL;

/// File name of the durable preference store inside `storage.dir`.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub pagerduty: PagerDutyConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagerDutyConfig {
    #[serde(default = "default_events_url")]
    pub events_url: String,
}

impl Default for PagerDutyConfig {
    fn default() -> Self {
        Self {
            events_url: default_events_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding durable local state (theme preference).
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_events_url() -> String {
    PAGERDUTY_EVENTS_URL.to_string()
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".workshop")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Loads config files in order (later ones override earlier ones), then
    /// `WORKSHOP__*` environment variables.
    pub fn load_from_sources(config_paths: &[PathBuf]) -> Result<Self> {
        let mut cfg = Config::builder();

        for path in config_paths {
            if path.exists() {
                cfg = cfg.add_source(File::from(path.clone()));
                info!("Loaded config file: {:?}", path);
            } else {
                info!("Config file not found, skipping: {:?}", path);
            }
        }

        cfg = cfg.add_source(Environment::with_prefix("WORKSHOP").separator("__"));

        let built = cfg.build().context("Failed to build configuration")?;
        let app_config: AppConfig = built
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;
        Ok(app_config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.pagerduty.events_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            anyhow::bail!("pagerduty.events_url must be an http(s) URL, got '{}'", url);
        }
        if self.storage.dir.as_os_str().is_empty() {
            anyhow::bail!("storage.dir must not be empty");
        }
        Ok(())
    }

    pub fn preferences_path(&self) -> PathBuf {
        Path::new(&self.storage.dir).join(PREFERENCES_FILE)
    }
}
