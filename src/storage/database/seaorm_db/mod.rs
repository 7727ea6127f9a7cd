// Module declarations
mod types;
mod connection;
mod user_ops;
mod role_ops;
mod access_ops;
mod user_role_ops;
mod role_access_ops;
mod association_ops;
mod stats_ops;

// Re-export public types
pub use association_ops::ReadSnapshot;
pub use types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};
