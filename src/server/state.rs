//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::rbac::AssociationResolver;
use crate::storage::Database;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every actix worker; all fields are reference counted.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Entity store
    pub storage: Arc<Database>,
    /// Association resolver over the same store
    pub resolver: Arc<AssociationResolver>,
}

impl AppState {
    /// Create a new AppState around an open store
    pub fn new(config: Config, storage: Arc<Database>) -> Self {
        let resolver = AssociationResolver::new(Arc::clone(&storage));

        Self {
            config: Arc::new(config),
            storage,
            resolver: Arc::new(resolver),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
