//! Storage layer for the RBAC service
//!
//! Persistence of users, roles, accesses and their associations.

/// Database storage module
pub mod database;

pub use database::{Database, DatabaseBackendType, DatabaseStats, EntityStore, ReadSnapshot};
