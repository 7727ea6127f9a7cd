//! # rolekeeper
//!
//! Role-based access control backend. Users hold roles (optionally until an
//! expiry date), roles are granted accesses, and the service answers which
//! access names a user effectively has.
//!
//! ## Features
//!
//! - **Entity store**: CRUD for users, roles, accesses, role assignments and
//!   access grants over SQLite or PostgreSQL (sea-orm)
//! - **Association resolver**: accesses of a role, active roles of a user and
//!   the distinct access names a user reaches through them
//! - **HTTP gateway**: JSON routes with a uniform response envelope
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use rolekeeper::{Config, rbac::AssociationResolver, storage::Database};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/rolekeeper.yaml").await?;
//!     let store = Arc::new(Database::new(config.database()).await?);
//!     store.migrate().await?;
//!
//!     let resolver = AssociationResolver::new(store);
//!     println!("{:?}", resolver.access_names_for_user(1).await?);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod rbac;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{RbacError, Result};

use serde::Serialize;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build information recorded by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
