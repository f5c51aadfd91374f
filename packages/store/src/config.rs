//! # Dashboard configuration: `dashboard.toml`
//!
//! Defines the settings the dashboard reads at start-up: where the REST backend
//! lives, how many users a page holds, and how long the search box waits for the
//! user to stop typing.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000/api"
//!
//! [pagination]
//! page_size = 10
//!
//! [search]
//! debounce_ms = 300
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DashboardConfig`] | Top-level config and its TOML + environment loader. |
//! | [`ApiConfig`] | Backend base URL, default [`DEFAULT_API_URL`]. |
//! | [`PaginationConfig`] | Users per page, default **10**. |
//! | [`SearchConfig`] | Debounce quiet period, default **300 ms**. |
//!
//! Every field has a serde default, so a missing or empty file is the default
//! configuration.
//!
//! ## Environment
//!
//! [`DashboardConfig::load`] parses the file and then overrides the base URL from
//! [`API_URL_ENV`]. In the browser there is no process environment, so on WASM the
//! variable is read at compile time instead.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "DASHBOARD_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("page_size must be at least 1")]
    ZeroPageSize,
}

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PaginationConfig {
    /// Users requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    10
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a search fetch fires.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl DashboardConfig {
    /// Parse `toml` and apply the [`API_URL_ENV`] override.
    ///
    /// An invalid file is logged and replaced by the defaults.
    pub fn load(toml: &str) -> Self {
        let config = Self::from_toml(toml).unwrap_or_else(|e| {
            tracing::warn!("ignoring dashboard config: {}", e);
            Self::default()
        });
        config.with_base_url_override(env_base_url())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    /// Parse from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        if config.pagination.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(config)
    }

    fn with_base_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api.base_url = url;
        }
        self
    }
}

#[cfg(target_arch = "wasm32")]
fn env_base_url() -> Option<String> {
    option_env!("DASHBOARD_API_URL")
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn env_base_url() -> Option<String> {
    std::env::var(API_URL_ENV).ok().filter(|url| !url.is_empty())
}
