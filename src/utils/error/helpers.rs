//! Helper functions for creating specific error types

use super::types::RbacError;

impl RbacError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn constraint_violation<S: Into<String>>(message: S) -> Self {
        Self::ConstraintViolation(message.into())
    }

    pub fn integrity<S: Into<String>>(message: S) -> Self {
        Self::Integrity(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Stable machine-readable code used in response envelopes
    pub fn code(&self) -> &'static str {
        match self {
            RbacError::Config(_) => "CONFIG_ERROR",
            RbacError::Database(_) => "DATABASE_ERROR",
            RbacError::Serialization(_) => "SERIALIZATION_ERROR",
            RbacError::Yaml(_) => "YAML_ERROR",
            RbacError::Io(_) => "IO_ERROR",
            RbacError::Validation(_) => "VALIDATION_ERROR",
            RbacError::NotFound(_) => "NOT_FOUND",
            RbacError::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            RbacError::Integrity(_) => "INTEGRITY_ERROR",
            RbacError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the error was caused by the caller rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RbacError::Validation(_) | RbacError::NotFound(_) | RbacError::ConstraintViolation(_)
        )
    }
}
