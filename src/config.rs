use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Application-level constants
pub const APP_NAME: &str = "MannMitra";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulated "companion is typing" pause before a chat reply appears.
pub const DEFAULT_TYPING_DELAY_MS: u64 = 1500;

/// Per-request timeout for hosted backend calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const ENV_BACKEND_URL: &str = "MANNMITRA_BACKEND_URL";
const ENV_BACKEND_ANON_KEY: &str = "MANNMITRA_BACKEND_ANON_KEY";
const ENV_LANGUAGE: &str = "MANNMITRA_LANGUAGE";

/// Get the application data directory
/// ~/MannMitra/ on all platforms, falling back to the working directory
/// when no home directory can be determined.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Location of the optional JSON config file.
pub fn config_path() -> PathBuf {
    app_data_dir().join("config.json")
}

/// Default `tracing` filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,mannmitra_lib=debug"
    } else {
        "info"
    }
}

/// Errors while loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unknown language tag: {0}")]
    Language(String),
}

/// Runtime configuration. Every field has a default so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the hosted backend, e.g. `https://xyz.supabase.co`.
    pub backend_url: String,
    /// Public (anon) API key sent as the `apikey` header.
    pub backend_anon_key: String,
    pub default_language: Language,
    pub typing_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            backend_anon_key: String::new(),
            default_language: Language::En,
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Defaults, then the config file (if present), then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(&config_path())?.unwrap_or_default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a config file. A missing file yields `Ok(None)`.
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })
    }

    /// Apply environment overrides through `lookup` (injectable for tests).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL).filter(|v| !v.trim().is_empty()) {
            self.backend_url = url.trim().to_string();
        }
        if let Some(key) = lookup(ENV_BACKEND_ANON_KEY).filter(|v| !v.trim().is_empty()) {
            self.backend_anon_key = key.trim().to_string();
        }
        if let Some(tag) = lookup(ENV_LANGUAGE).filter(|v| !v.trim().is_empty()) {
            self.default_language = tag
                .trim()
                .parse()
                .map_err(|_| ConfigError::Language(tag.clone()))?;
        }
        Ok(())
    }

    /// True when enough is configured to reach the hosted backend.
    pub fn has_backend(&self) -> bool {
        !self.backend_url.is_empty() && !self.backend_anon_key.is_empty()
    }
}
