//! Test fixtures and data factories
//!
//! Provides factory methods for creating test records with sensible
//! defaults. Names are unique within a test run so factories can be called
//! repeatedly against one database.

use rolekeeper::core::models::{Access, Role, User};
use std::sync::atomic::{AtomicUsize, Ordering};

static SEQUENCE: AtomicUsize = AtomicUsize::new(1);

/// A name no other factory call has produced
pub fn unique_name(prefix: &str) -> String {
    format!("{}_{}", prefix, SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// Factory for creating test users
pub struct UserFactory;

impl UserFactory {
    /// Create a valid user with a unique name
    pub fn create() -> User {
        Self::named(&unique_name("user"))
    }

    /// Create a valid user with the given name
    pub fn named(name: &str) -> User {
        User::new(name, "9998887776", format!("{}@example.com", name))
    }
}

/// Factory for creating test roles
pub struct RoleFactory;

impl RoleFactory {
    pub fn create() -> Role {
        Role::new(unique_name("role"))
    }
}

/// Factory for creating test accesses
pub struct AccessFactory;

impl AccessFactory {
    pub fn create() -> Access {
        Access::new(unique_name("access"))
    }
}
