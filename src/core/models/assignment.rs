//! Association rows: role assignments and access grants

use crate::utils::FieldValidator;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Assignment of a role to a user, optionally time-limited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub user_id: i32,
    pub role_id: i32,
    /// The assignment stops granting anything once this instant has passed
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
}

impl UserRole {
    pub fn new(user_id: i32, role_id: i32, expiry_date: Option<DateTime<Utc>>) -> Self {
        Self {
            user_id,
            role_id,
            expiry_date,
        }
    }

    pub fn key(&self) -> UserRoleKey {
        UserRoleKey {
            user_id: self.user_id,
            role_id: self.role_id,
        }
    }

    /// Whether the assignment still grants its role at `now`.
    ///
    /// An assignment expires strictly after its expiry instant.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        match self.expiry_date {
            Some(expiry) => expiry >= now,
            None => true,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.key().validate()
    }
}

/// Composite key of a [`UserRole`] row.
///
/// Read from `user_id` / `role_id` query parameters, written in the same
/// camelCase as the row itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct UserRoleKey {
    pub user_id: i32,
    pub role_id: i32,
}

impl UserRoleKey {
    pub fn validate(&self) -> Result<()> {
        FieldValidator::validate_id("user_id", self.user_id)?;
        FieldValidator::validate_id("role_id", self.role_id)
    }
}

impl fmt::Display for UserRoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(user {}, role {})", self.user_id, self.role_id)
    }
}

/// Grant of an access to a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAccess {
    pub role_id: i32,
    pub access_id: i32,
}

impl RoleAccess {
    pub fn new(role_id: i32, access_id: i32) -> Self {
        Self { role_id, access_id }
    }

    pub fn key(&self) -> RoleAccessKey {
        RoleAccessKey {
            role_id: self.role_id,
            access_id: self.access_id,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.key().validate()
    }
}

/// Composite key of a [`RoleAccess`] row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct RoleAccessKey {
    pub role_id: i32,
    pub access_id: i32,
}

impl RoleAccessKey {
    pub fn validate(&self) -> Result<()> {
        FieldValidator::validate_id("role_id", self.role_id)?;
        FieldValidator::validate_id("access_id", self.access_id)
    }
}

impl fmt::Display for RoleAccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(role {}, access {})", self.role_id, self.access_id)
    }
}
