//! Console configuration
//!
//! Values are layered: built-in defaults, then an optional `procurex.toml`
//! (or the file named by `PROCUREX_CONFIG`), then environment variables.
//! A `.env` file is read via `dotenvy` before the environment is consulted.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConsoleError, ConsoleResult};

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://procurex-backend.onrender.com";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "procurex.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "PROCUREX_CONFIG";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "PROCUREX_API_URL";

// ============================================================================
// Sections
// ============================================================================

/// REST backend settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Desktop window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ProcureX".to_string(),
            width: 1280.0,
            height: 860.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub window: WindowConfig,
}

impl ConsoleConfig {
    /// Load configuration from the usual places
    pub fn load() -> ConsoleResult<Self> {
        // A missing .env file is normal
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }

        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.finish()
    }

    /// Read a TOML file on top of the defaults
    pub fn from_file(path: &Path) -> ConsoleResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConsoleError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml(&content)
            .map_err(|e| ConsoleError::InvalidConfig(format!("{}: {e}", path.display())))?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse TOML text on top of the defaults
    pub fn from_toml(content: &str) -> ConsoleResult<Self> {
        toml::from_str(content).map_err(|e| ConsoleError::InvalidConfig(e.to_string()))
    }

    /// Apply environment overrides through a lookup function
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
    }

    /// Normalize and check the loaded values
    pub fn finish(mut self) -> ConsoleResult<Self> {
        self.api.base_url = normalize_base_url(&self.api.base_url)?;
        Ok(self)
    }
}

/// Trim whitespace and trailing slashes, and require an http(s) scheme
pub fn normalize_base_url(raw: &str) -> ConsoleResult<String> {
    let url = raw.trim().trim_end_matches('/');
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            ConsoleError::InvalidConfig(format!("base URL must start with http(s)://: '{raw}'"))
        })?;
    if host.is_empty() {
        return Err(ConsoleError::InvalidConfig(format!(
            "base URL has no host: '{raw}'"
        )));
    }
    Ok(url.to_string())
}
