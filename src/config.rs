//!
//! Handles application configuration: the named Qdrant endpoint profiles and
//! which of them is preferred when the command line does not pick one.
//! Configuration is loaded from a `config.toml` file.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf};
use crate::constants::{DEFAULT_COLLECTION_NAME, DEFAULT_ENDPOINT_NAME, DEFAULT_QDRANT_URL};
use crate::error::AdminError;

const APP_NAME: &str = "collection-admin";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
/// Connection settings for one named Qdrant instance.
pub struct EndpointConfig {
    /// gRPC URL of the Qdrant server (e.g. `http://localhost:6334`).
    #[serde(default)]
    pub url: Option<String>,
    /// Name of an environment variable holding the URL. Used when `url` is unset.
    #[serde(default)]
    pub url_env: Option<String>,
    /// API key sent with every request.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Name of an environment variable holding the API key. Used when `api_key` is unset.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Collection used when the command line does not name one.
    #[serde(default)]
    pub collection_name: Option<String>,
    /// Request timeout in seconds. The client's own default applies when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl EndpointConfig {
    /// Returns the server URL, reading `url_env` from the environment if needed.
    pub fn resolve_url(&self, endpoint_name: &str) -> crate::error::Result<String> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }
        match &self.url_env {
            Some(var) => std::env::var(var).map_err(|_| {
                AdminError::ConfigurationError(format!(
                    "Endpoint '{endpoint_name}' reads its URL from ${var}, which is not set"
                ))
            }),
            None => Err(AdminError::ConfigurationError(format!(
                "Endpoint '{endpoint_name}' has neither 'url' nor 'url_env'"
            ))),
        }
    }

    /// Returns the API key, if any. A named but unset `api_key_env` is an error.
    pub fn resolve_api_key(&self, endpoint_name: &str) -> crate::error::Result<Option<String>> {
        if let Some(key) = &self.api_key {
            return Ok(Some(key.clone()));
        }
        match &self.api_key_env {
            Some(var) => std::env::var(var).map(Some).map_err(|_| {
                AdminError::ConfigurationError(format!(
                    "Endpoint '{endpoint_name}' reads its API key from ${var}, which is not set"
                ))
            }),
            None => Ok(None),
        }
    }

    /// Collection name used when none is given on the command line.
    pub fn default_collection_name(&self) -> &str {
        self.collection_name.as_deref().unwrap_or(DEFAULT_COLLECTION_NAME)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
/// Main application configuration structure.
pub struct AppConfig {
    /// Endpoint used when the command line does not name one.
    #[serde(default = "default_preferred_endpoint")]
    pub preferred_endpoint: String,
    /// Endpoint profiles keyed by name.
    #[serde(default)]
    pub endpoints: HashMap<String, EndpointConfig>,
}

fn default_preferred_endpoint() -> String {
    DEFAULT_ENDPOINT_NAME.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        let local = EndpointConfig {
            url: Some(DEFAULT_QDRANT_URL.to_string()),
            collection_name: Some(DEFAULT_COLLECTION_NAME.to_string()),
            ..Default::default()
        };
        AppConfig {
            preferred_endpoint: default_preferred_endpoint(),
            endpoints: HashMap::from([(DEFAULT_ENDPOINT_NAME.to_string(), local)]),
        }
    }
}

impl AppConfig {
    /// Looks up an endpoint profile, falling back to `preferred_endpoint`.
    /// Returns the effective endpoint name alongside its settings.
    pub fn endpoint<'a>(&'a self, name: Option<&'a str>) -> crate::error::Result<(&'a str, &'a EndpointConfig)> {
        let name = name.unwrap_or(&self.preferred_endpoint);
        self.endpoints
            .get(name)
            .map(|endpoint| (name, endpoint))
            .ok_or_else(|| AdminError::EndpointNotFound(name.to_string()))
    }

    /// Validates that every endpoint can produce a URL.
    pub fn validate(&self) -> Result<()> {
        for (name, endpoint) in &self.endpoints {
            if endpoint.url.is_none() && endpoint.url_env.is_none() {
                return Err(anyhow!(
                    "Configuration error: endpoint '{}' must set either 'url' or 'url_env'.",
                    name
                ));
            }
            if endpoint.timeout_secs == Some(0) {
                return Err(anyhow!(
                    "Configuration error: endpoint '{}' has 'timeout_secs = 0'.",
                    name
                ));
            }
        }
        Ok(())
    }
}

/// Returns the default path to the configuration file.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not find config directory"))?
        .join(APP_NAME);
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Gets the configuration path from the override or the default location.
pub fn get_config_path_or_default(override_path: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        log::debug!("Using override config path: {}", path.display());
        return Ok(path.clone());
    }
    get_config_path()
}

/// Loads the application configuration from a specified path or the default location.
///
/// A missing file is not an error: the built-in default configuration is returned
/// and nothing is written to disk.
/// Returns an error if the file exists but cannot be read, parsed or validated.
pub fn load_config(override_path: Option<&PathBuf>) -> Result<AppConfig> {
    let config_file_path = get_config_path_or_default(override_path)?;
    log::debug!("Attempting to load config from: {}", config_file_path.display());

    if !config_file_path.exists() {
        log::info!(
            "Config file not found at '{}'. Using defaults.",
            config_file_path.display()
        );
        return Ok(AppConfig::default());
    }

    let config_content = fs::read_to_string(&config_file_path)
        .with_context(|| format!("Failed to read config file at '{}'", config_file_path.display()))?;

    match toml::from_str::<AppConfig>(&config_content) {
        Ok(config) => {
            log::debug!("Parsed config successfully: {config:?}");
            config.validate()?;
            Ok(config)
        }
        Err(e) => {
            log::error!(
                "Failed to parse config file at '{}': {}. Ensure it is valid TOML.",
                config_file_path.display(),
                e
            );
            anyhow::bail!("Failed to parse configuration file: {}", e)
        }
    }
}
