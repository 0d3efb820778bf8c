// Configuration module
//
// YAML configuration for builders created by an application: the base path
// rewritten URLs are rooted at, storage-backend prefixes, and which modifiers
// every builder starts with.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    DEFAULT_APP_VIRTUAL_PATH, DEFAULT_AZURE_PREFIX, DEFAULT_REMOTE_PREFIX, DEFAULT_S3_PREFIX,
};
use crate::error::{Result, UrlBuilderError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlConfig {
    /// Application base path, e.g. `/` or `/gallery`
    #[serde(default = "default_app_virtual_path")]
    pub app_virtual_path: String,

    /// Register the lower-case modifier on every new builder (default: false)
    #[serde(default)]
    pub lowercase_urls: bool,

    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage backends a builder can route through
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Remote,
    S3,
    Azure,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Backend registered on every new builder (default: none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_backend: Option<StorageBackend>,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub s3: S3Config,

    #[serde(default)]
    pub azure: AzureConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_prefix")]
    pub prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3Config {
    #[serde(default = "default_s3_prefix")]
    pub prefix: String,

    /// Fixed bucket; inferred from the image path's first segment when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AzureConfig {
    #[serde(default = "default_azure_prefix")]
    pub prefix: String,

    /// Fixed container; inferred from the image path's first segment when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

fn default_app_virtual_path() -> String {
    DEFAULT_APP_VIRTUAL_PATH.to_string()
}

fn default_remote_prefix() -> String {
    DEFAULT_REMOTE_PREFIX.to_string()
}

fn default_s3_prefix() -> String {
    DEFAULT_S3_PREFIX.to_string()
}

fn default_azure_prefix() -> String {
    DEFAULT_AZURE_PREFIX.to_string()
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            app_virtual_path: default_app_virtual_path(),
            lowercase_urls: false,
            storage: StorageConfig::default(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            prefix: default_remote_prefix(),
        }
    }
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            prefix: default_s3_prefix(),
            bucket: None,
        }
    }
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self {
            prefix: default_azure_prefix(),
            container: None,
        }
    }
}

impl UrlConfig {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| UrlBuilderError::config(e.to_string()))?;

        let mut missing = None;
        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.get_or_insert_with(|| var_name.to_string());
                String::new()
            })
        });
        if let Some(var_name) = missing {
            return Err(UrlBuilderError::config(format!(
                "Environment variable '{}' is referenced but not set",
                var_name
            )));
        }

        let config: UrlConfig = serde_yaml::from_str(&substituted)
            .map_err(|e| UrlBuilderError::config(e.to_string()))?;

        tracing::debug!(
            app_virtual_path = %config.app_virtual_path,
            lowercase_urls = config.lowercase_urls,
            default_backend = ?config.storage.default_backend,
            "URL configuration parsed"
        );

        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| UrlBuilderError::config(format!("Failed to read config file: {}", e)))?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.app_virtual_path.starts_with('/') {
            return Err(UrlBuilderError::config(format!(
                "app_virtual_path '{}' must start with '/'",
                self.app_virtual_path
            )));
        }

        let prefixes = [
            ("storage.remote.prefix", &self.storage.remote.prefix),
            ("storage.s3.prefix", &self.storage.s3.prefix),
            ("storage.azure.prefix", &self.storage.azure.prefix),
        ];
        for (field, prefix) in prefixes {
            if prefix.trim_matches('/').is_empty() {
                return Err(UrlBuilderError::config(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }

        Ok(())
    }
}
