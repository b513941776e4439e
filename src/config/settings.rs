//! User settings for fintrack
//!
//! Backend location, cache windows, retry counts and display preferences.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::file_io::{read_json, write_json_atomic};
use super::paths::FintrackPaths;
use crate::error::FinanceError;

/// Environment variable that overrides the backend base URL
pub const API_URL_ENV: &str = "FINTRACK_API_URL";

/// Where the backend lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the backend, without the `/api` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Cache freshness and retry behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySettings {
    /// How long an entity list stays fresh
    #[serde(default = "default_entity_stale_secs")]
    pub entity_stale_secs: u64,

    /// How long an analytics view stays fresh
    #[serde(default = "default_analytics_stale_secs")]
    pub analytics_stale_secs: u64,

    /// Retries after a failed entity read
    #[serde(default = "default_retries")]
    pub entity_retries: u32,

    /// Retries after a failed analytics read (never applied to rate limits)
    #[serde(default = "default_retries")]
    pub analytics_retries: u32,

    /// Pause between attempts
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl QuerySettings {
    pub fn entity_stale_time(&self) -> Duration {
        Duration::from_secs(self.entity_stale_secs)
    }

    pub fn analytics_stale_time(&self) -> Duration {
        Duration::from_secs(self.analytics_stale_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            entity_stale_secs: default_entity_stale_secs(),
            analytics_stale_secs: default_analytics_stale_secs(),
            entity_retries: default_retries(),
            analytics_retries: default_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub query: QuerySettings,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_entity_stale_secs() -> u64 {
    30
}

fn default_analytics_stale_secs() -> u64 {
    300
}

fn default_retries() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api: ApiSettings::default(),
            query: QuerySettings::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk (defaults when the file doesn't exist), then
    /// apply environment overrides
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FinanceError> {
        let mut settings: Settings = read_json(paths.settings_file())?;
        settings.apply_env();
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url.trim().to_string();
            }
        }
    }

    fn validate(&self) -> Result<(), FinanceError> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(FinanceError::Config(format!(
                "API base URL must start with http:// or https://, got '{}'",
                url
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(FinanceError::Config("Request timeout must be positive".into()));
        }
        Ok(())
    }
}
