//! Type conversions for RbacError

use super::types::RbacError;
use sea_orm::{DbErr, SqlErr};

impl RbacError {
    /// Classify a store error.
    ///
    /// Unique, primary-key and foreign-key violations become
    /// [`RbacError::ConstraintViolation`]; everything else stays a
    /// [`RbacError::Database`] error.
    pub fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => {
                RbacError::ConstraintViolation(message)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                RbacError::ConstraintViolation(message)
            }
            _ if is_constraint_message(&err.to_string()) => {
                RbacError::ConstraintViolation(err.to_string())
            }
            _ => RbacError::Database(err),
        }
    }
}

// Drivers that do not report SQLSTATE / extended result codes still put the
// constraint kind in the message text.
fn is_constraint_message(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    message.contains("unique constraint")
        || message.contains("foreign key constraint")
        || message.contains("duplicate key")
        || message.contains("duplicate entry")
}
