//! Utility modules for the RBAC service
//!
//! - **error**: error type, classification of store errors and HTTP mapping
//! - **validation**: field format validators applied before any store call

pub mod error;
pub mod validation;

pub use validation::FieldValidator;
