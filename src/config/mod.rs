//! Configuration management for the RBAC service
//!
//! This module handles loading, validation, and environment overrides of the
//! service configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{RbacError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable overriding the bind host
pub const ENV_HOST: &str = "ROLEKEEPER_HOST";
/// Environment variable overriding the bind port
pub const ENV_PORT: &str = "ROLEKEEPER_PORT";
/// Environment variable overriding the database URL
pub const ENV_DATABASE_URL: &str = "ROLEKEEPER_DATABASE_URL";
/// Environment variable overriding the connection pool size
pub const ENV_DATABASE_MAX_CONNECTIONS: &str = "ROLEKEEPER_DATABASE_MAX_CONNECTIONS";

/// Main configuration struct for the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RbacError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| RbacError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self::default().with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ROLEKEEPER_*` environment variables
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }

        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .parse()
                .map_err(|e| RbacError::Config(format!("Invalid {}: {}", ENV_PORT, e)))?;
        }

        if let Some(url) = lookup(ENV_DATABASE_URL) {
            self.storage.database.url = url;
        }

        if let Some(max) = lookup(ENV_DATABASE_MAX_CONNECTIONS) {
            self.storage.database.max_connections = max.parse().map_err(|e| {
                RbacError::Config(format!("Invalid {}: {}", ENV_DATABASE_MAX_CONNECTIONS, e))
            })?;
        }

        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.storage.database
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| RbacError::Config(format!("Server config error: {}", e)))?;

        self.server
            .cors
            .validate()
            .map_err(|e| RbacError::Config(format!("CORS config error: {}", e)))?;

        self.storage
            .database
            .validate()
            .map_err(|e| RbacError::Config(format!("Database config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| RbacError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
