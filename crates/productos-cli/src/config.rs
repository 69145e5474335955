//! Configuration management for the products CLI
//!
//! Stores the API location in ~/.config/productos/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "productos";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the configured base URL
pub const BASE_URL_ENV: &str = "PRODUCTOS_BASE_URL";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    /// Parse config file content
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Apply overrides: environment first, then the command-line flag
    pub fn with_overrides(mut self, env_base_url: Option<String>, flag_base_url: Option<String>) -> Self {
        if let Some(url) = flag_base_url.or(env_base_url).filter(|u| !u.is_empty()) {
            self.base_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_parse_custom_values() {
        let config = Config::parse("base_url = \"https://shop.example.com\"\n").unwrap();

        assert_eq!(config.base_url, "https://shop.example.com");
    }

    #[test]
    fn test_only_host_is_configurable() {
        let config = Config::parse(
            "base_url = \"http://api.local\"\nresource_path = \"/v2/products/\"\n",
        )
        .unwrap();

        assert_eq!(config.base_url, "http://api.local");
        let saved = toml::to_string_pretty(&config).unwrap();
        assert!(!saved.contains("resource_path"));
    }

    #[test]
    fn test_flag_beats_env() {
        let config = Config::default().with_overrides(
            Some("http://env:1".to_string()),
            Some("http://flag:2".to_string()),
        );
        assert_eq!(config.base_url, "http://flag:2");

        let env_only = Config::default().with_overrides(Some("http://env:1".to_string()), None);
        assert_eq!(env_only.base_url, "http://env:1");

        let blank = Config::default().with_overrides(Some(String::new()), None);
        assert_eq!(blank.base_url, "http://127.0.0.1:8000");
    }
}
