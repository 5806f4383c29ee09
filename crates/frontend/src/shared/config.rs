//! Frontend configuration.
//!
//! Defaults are embedded from `config/app.toml`; the API and image base URLs
//! can be overridden at build time through `APP_API_BASE_URL` and
//! `APP_IMAGE_BASE_URL`.

use contracts::shared::list::{DEFAULT_PER_PAGE, META_PER_PAGE};
use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub lists: ListsConfig,
    /// `error`, `warn`, `info`, `debug` or `trace`
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Config {
    /// Console log level; unknown names fall back to `debug`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port 3000"
    #[serde(default)]
    pub base_url: String,
    /// Prefix for stored image paths; empty means the API base
    #[serde(default)]
    pub image_base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListsConfig {
    pub per_page: u32,
    pub meta_per_page: u32,
    pub search_debounce_ms: u32,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            meta_per_page: META_PER_PAGE,
            search_debounce_ms: 500,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config/app.toml");

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Parse the embedded config and apply build-time overrides
pub fn load_config() -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(DEFAULT_CONFIG)?;
    apply_overrides(
        &mut config,
        option_env!("APP_API_BASE_URL"),
        option_env!("APP_IMAGE_BASE_URL"),
    );
    Ok(config)
}

fn apply_overrides(config: &mut Config, api_base_url: Option<&str>, image_base_url: Option<&str>) {
    if let Some(url) = api_base_url.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url.trim().trim_end_matches('/').to_string();
    }
    if let Some(url) = image_base_url.filter(|u| !u.trim().is_empty()) {
        config.api.image_base_url = url.trim().to_string();
    }
}

/// Configuration loaded once per page
pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| match load_config() {
        Ok(config) => {
            log::debug!("config loaded: api='{}'", config.api.base_url);
            config
        }
        Err(e) => {
            log::error!("embedded config is invalid, using defaults: {}", e);
            Config {
                api: ApiConfig::default(),
                lists: ListsConfig::default(),
                log_level: default_log_level(),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.lists, ListsConfig::default());
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_debug() {
        let config: Config = toml::from_str("log_level = \"loud\"\n[api]\n").unwrap();
        assert_eq!(config.log_level(), log::Level::Debug);
        let config: Config = toml::from_str("log_level = \"warn\"\n[api]\n").unwrap();
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_overrides_replace_blank_values_only() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_overrides(&mut config, Some("https://api.example.com/ "), Some("  "));
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.image_base_url, "");
    }
}
