//! Configuration types for the continuum server

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use continuum_app::config::DEFAULT_TIMEZONE;
use continuum_app::endpoints::Endpoints;
use continuum_app::table::DEFAULT_PAGE_SIZE;
use continuum_app::ClientConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: Endpoints,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// HTTP listener and static bundle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the built wasm bundle under `pkg/`
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,
    /// Table rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            site_root: default_site_root(),
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// IANA timezone every date is rendered in
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl Config {
    /// Reject templates with unknown or missing placeholders and unknown
    /// timezones
    pub fn validate(&self) -> crate::Result<()> {
        self.api.validate()?;
        self.display.timezone.parse::<Tz>().map_err(|_| {
            crate::ContinuumError::Config(format!(
                "Unknown timezone {:?}",
                self.display.timezone
            ))
        })?;
        if self.server.page_size == 0 {
            return Err(crate::ContinuumError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The part of the configuration the browser application receives
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api: self.api.clone(),
            timezone: self.display.timezone.clone(),
            page_size: self.server.page_size,
        }
    }
}

fn default_port() -> u16 {
    11120
}

fn default_site_root() -> PathBuf {
    PathBuf::from("target/site")
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

/// Load and validate configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::ContinuumError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
