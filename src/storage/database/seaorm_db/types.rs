use chrono::Utc;
use sea_orm::DatabaseConnection;
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use serde::Serialize;

/// SeaORM-based database implementation
#[derive(Debug)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

impl DatabaseBackendType {
    /// Infer the backend from a connection URL
    pub fn from_url(url: &str) -> Self {
        if url.starts_with("sqlite") {
            Self::SQLite
        } else {
            Self::PostgreSQL
        }
    }
}

/// Row counts per table, reported by the health endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatabaseStats {
    pub users: u64,
    pub roles: u64,
    pub accesses: u64,
    pub user_roles: u64,
    pub role_accesses: u64,
}

/// Timestamp written into `created_at` / `updated_at`
pub(super) fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}
