//! Configuration handed from the server to the browser application
//!
//! The server embeds a [`ClientConfig`] as JSON in the page under
//! [`CONFIG_ELEMENT_ID`]; the browser build reads it back before mounting.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::endpoints::Endpoints;
use crate::table::DEFAULT_PAGE_SIZE;

/// Id of the `<script type="application/json">` element holding the config
pub const CONFIG_ELEMENT_ID: &str = "continuum-config";

pub const DEFAULT_TIMEZONE: &str = "Europe/Rome";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: Endpoints,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: Endpoints::default(),
            timezone: default_timezone(),
            page_size: default_page_size(),
        }
    }
}

impl ClientConfig {
    /// Resolved display settings; an unknown timezone falls back to Rome
    pub fn display(&self) -> DisplaySettings {
        let timezone = self.timezone.parse::<Tz>().unwrap_or_else(|_| {
            tracing::warn!("unknown timezone {}, using {}", self.timezone, DEFAULT_TIMEZONE);
            chrono_tz::Europe::Rome
        });
        DisplaySettings {
            timezone,
            page_size: self.page_size.max(1),
        }
    }
}

/// Settings every formatted value and table needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySettings {
    pub timezone: Tz,
    pub page_size: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Europe::Rome,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.display(), DisplaySettings::default());
    }

    #[test]
    fn timezone_and_page_size_are_resolved() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"timezone": "UTC", "page_size": 0}"#).unwrap();
        let display = config.display();
        assert_eq!(display.timezone, chrono_tz::UTC);
        assert_eq!(display.page_size, 1);
    }

    #[test]
    fn unknown_timezone_falls_back() {
        let config = ClientConfig {
            timezone: "Mars/Olympus".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.display().timezone, chrono_tz::Europe::Rome);
    }
}
