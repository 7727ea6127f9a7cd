//! Error types for the RBAC service

use thiserror::Error;

/// Result type alias for the RBAC service
pub type Result<T> = std::result::Result<T, RbacError>;

/// Main error type for the RBAC service
#[derive(Error, Debug)]
pub enum RbacError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying store failures (connectivity, driver, malformed rows)
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input (email, mobile, id, body)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Root entity absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness or foreign-key violation at write time
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Association rows pointing at records that no longer exist
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
