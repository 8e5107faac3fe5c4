//! # Configuration
//!
//! Client settings live in `config.json` inside the OS config directory (see
//! [`default_config_dir`]), or in `$RECIPEBOOK_CONFIG_DIR` when that is set.
//!
//! ## Resolution
//!
//! The endpoint is picked in this order:
//! 1. `--api-url` on the command line
//! 2. `RECIPEBOOK_API_URL`
//! 3. `api_url` in `config.json`
//! 4. The built-in default
//!
//! ## Keys
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api-url` | hosted recipe API | Collection endpoint of the remote store |
//! | `timeout` | none | HTTP request timeout in seconds |

use crate::error::{RecipeError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_API_URL: &str =
    "https://creative-biscotti-f2e825.netlify.app/.netlify/functions/api";
pub const ENV_API_URL: &str = "RECIPEBOOK_API_URL";
pub const ENV_CONFIG_DIR: &str = "RECIPEBOOK_CONFIG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeConfig {
    /// Collection endpoint; records live at `<api_url>/<id>`
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds. No timeout when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: None,
        }
    }
}

/// `$RECIPEBOOK_CONFIG_DIR`, or the platform config directory.
pub fn default_config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "recipebook", "recipebook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RecipeError::Config("Could not determine config dir".to_string()))
}

impl RecipeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RecipeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Apply the environment and command-line endpoint overrides, in that order.
    pub fn with_overrides(mut self, env_url: Option<String>, flag_url: Option<String>) -> Self {
        for url in [env_url, flag_url].into_iter().flatten() {
            if !url.trim().is_empty() {
                self.api_url = url;
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api-url" => Some(self.api_url.clone()),
            "timeout" => Some(
                self.timeout_secs
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "api-url" => {
                let value = value.trim();
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(format!("api-url must be an http(s) URL, got: {}", value));
                }
                self.api_url = value.trim_end_matches('/').to_string();
                Ok(())
            }
            "timeout" => {
                if value == "none" {
                    self.timeout_secs = None;
                    return Ok(());
                }
                let secs: u64 = value
                    .parse()
                    .map_err(|_| format!("timeout must be a number of seconds, got: {}", value))?;
                self.timeout_secs = Some(secs);
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["api-url", "timeout"]
    }
}
