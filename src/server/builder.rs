//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{RbacError, Result};
use std::path::Path;
use tracing::{info, warn};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/rolekeeper.yaml";

/// Server builder for easier configuration
#[derive(Debug, Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| RbacError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

/// Load the configuration for `path`, falling back to defaults when the
/// file is missing. Environment overrides are applied either way.
pub async fn load_config(path: &Path) -> Result<Config> {
    let config = if path.exists() {
        Config::from_file(path).await?
    } else {
        warn!(
            "Configuration file {:?} not found, using default configuration",
            path
        );
        Config::default()
    };

    let config = config.with_env_overrides()?;
    config.validate()?;
    Ok(config)
}

/// Run the server with the configuration at `path`
pub async fn run_server(path: &Path) -> Result<()> {
    info!("Starting rolekeeper v{}", crate::VERSION);

    let config = load_config(path).await?;
    let server = ServerBuilder::new().with_config(config).build().await?;

    info!("Server starting at: http://{}", server.config().address());
    info!("   GET  /health - Health check");
    info!(
        "   {}/{{users,roles,accesses,user-roles,role-accesses}}/{{create,get,update,delete,list}}",
        crate::server::routes::API_PREFIX
    );

    server.start().await
}
