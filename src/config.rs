//! # Resolver Configuration
//!
//! Configuration for the sim-service API client and the plugin lifecycle.
//! Supports config files and environment variable overrides.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::constants::{api, REGISTRY_VERSION};
use crate::error::ConfigurationError;

type ConfigResult<T> = Result<T, ConfigurationError>;

/// Resolver configuration
///
/// # Examples
///
/// ```rust
/// use simservice_resolver::config::ResolverConfig;
///
/// let config = ResolverConfig::default();
/// assert_eq!(config.api.base_url, "https://sms-4kqy.onrender.com");
/// assert!(config.api.timeout_ms.is_none());
/// assert!(config.plugin.enabled_by_default);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// sim-service API settings
    #[serde(default)]
    pub api: SimServiceApiConfig,
    /// Plugin lifecycle settings
    #[serde(default)]
    pub plugin: PluginConfig,
}

/// sim-service API endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimServiceApiConfig {
    /// Base URL of the sim-service API
    pub base_url: String,
    /// Path of the message listing endpoint
    pub messages_path: String,
    /// Request timeout in milliseconds; transport default when unset
    pub timeout_ms: Option<u64>,
}

impl Default for SimServiceApiConfig {
    fn default() -> Self {
        Self {
            base_url: api::DEFAULT_BASE_URL.to_string(),
            messages_path: api::MESSAGES_PATH.to_string(),
            timeout_ms: None,
        }
    }
}

impl SimServiceApiConfig {
    /// Config pointing at a different base URL, other settings default
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Full URL of the message listing endpoint.
    ///
    /// `messages_path` is appended to whatever path `base_url` already has,
    /// so a gateway prefix like `https://gw.example.com/sim` is kept.
    pub fn messages_url(&self) -> ConfigResult<Url> {
        let mut base = Url::parse(&self.base_url).map_err(|e| {
            ConfigurationError::invalid_value("api.base_url", &self.base_url, e.to_string())
        })?;

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        base.join(self.messages_path.trim_start_matches('/')).map_err(|e| {
            ConfigurationError::invalid_value(
                "api.messages_path",
                &self.messages_path,
                e.to_string(),
            )
        })
    }
}

/// Plugin lifecycle configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Whether the host should enable the plugin the first time it loads
    pub enabled_by_default: bool,
    /// Plugin registry version the plugin declares
    pub registry_version: u32,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            enabled_by_default: true,
            registry_version: REGISTRY_VERSION,
        }
    }
}

impl ResolverConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file (first of ./simservice.toml, ./config/simservice.toml,
    ///    ~/.simservice/config.toml, <config dir>/simservice/config.toml)
    /// 3. Default values
    pub fn load() -> ConfigResult<Self> {
        let mut config = Self::find_config_file()
            .map(|config_path| Self::load_or_default(&config_path))
            .unwrap_or_default();

        config.apply_env_overrides();
        config.validate()?;

        debug!("Loaded resolver configuration: {:?}", config);
        Ok(config)
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigurationError::file_read_error(path.display().to_string(), e))?;

        toml::from_str(&content).map_err(|e| ConfigurationError::Parse(e.to_string()))
    }

    /// Load `path`, falling back to defaults (with a warning) when the file
    /// can't be read or parsed
    fn load_or_default(path: &Path) -> Self {
        debug!("Loading config from: {}", path.display());
        Self::load_from_file(path).unwrap_or_else(|e| {
            warn!(
                path = %path.display(),
                error = %e,
                "Ignoring unusable config file - using defaults"
            );
            Self::default()
        })
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigurationError::FileWrite {
                path: parent.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigurationError::Parse(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigurationError::FileWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Check the configuration can produce a working client
    pub fn validate(&self) -> ConfigResult<()> {
        self.api.messages_url()?;

        if self.api.timeout_ms == Some(0) {
            return Err(ConfigurationError::invalid_value(
                "api.timeout_ms",
                "0",
                "timeout must be positive when set",
            ));
        }

        Ok(())
    }

    fn find_config_file() -> Option<PathBuf> {
        let mut possible_paths = vec![
            PathBuf::from("./simservice.toml"),
            PathBuf::from("./config/simservice.toml"),
        ];
        if let Some(home) = dirs::home_dir() {
            possible_paths.push(home.join(".simservice").join("config.toml"));
        }
        if let Some(config_dir) = dirs::config_dir() {
            possible_paths.push(config_dir.join("simservice").join("config.toml"));
        }

        possible_paths
            .into_iter()
            .find(|path| path.exists() && path.is_file())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SIMSERVICE_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("SIMSERVICE_TIMEOUT_MS") {
            match timeout.parse() {
                Ok(timeout_ms) => self.api.timeout_ms = Some(timeout_ms),
                Err(e) => warn!(
                    value = %timeout,
                    error = %e,
                    "Ignoring invalid SIMSERVICE_TIMEOUT_MS"
                ),
            }
        }
        if let Ok(enabled) = std::env::var("SIMSERVICE_PLUGIN_ENABLED") {
            match enabled.parse() {
                Ok(enabled) => self.plugin.enabled_by_default = enabled,
                Err(e) => warn!(
                    value = %enabled,
                    error = %e,
                    "Ignoring invalid SIMSERVICE_PLUGIN_ENABLED"
                ),
            }
        }
    }
}
