//! Binding between domain records and the generic CRUD executors
//!
//! A [`Resource`] says how a record is keyed in the query string and which
//! JSON bodies create and update it.

use crate::core::models::{
    Access, Role, RoleAccess, RoleAccessKey, User, UserRole, UserRoleKey,
};
use crate::utils::FieldValidator;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A record type served by the CRUD routes
pub trait Resource: Serialize + Send + Sync + Sized + 'static {
    /// Human-readable name used in log lines
    const NAME: &'static str;

    type Key: Copy + Display + Serialize + Send + Sync + 'static;
    type KeyQuery: DeserializeOwned;
    type CreatePayload: DeserializeOwned;
    type UpdatePayload: DeserializeOwned;

    fn key_from_query(query: Self::KeyQuery) -> Self::Key;

    /// Format rules for a key supplied by the caller
    fn validate_key(key: &Self::Key) -> Result<()>;

    fn from_create(payload: Self::CreatePayload) -> Self;

    fn from_update(key: Self::Key, payload: Self::UpdatePayload) -> Self;

    /// Format rules checked before the store is called
    fn validate(&self) -> Result<()>;
}

/// `?id=` query for single-id records
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdQuery {
    pub id: i32,
}


/// Body of user create / update requests
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub user_name: String,
    pub mobile: String,
    pub email_id: String,
}

/// Body of role and access create / update requests
#[derive(Debug, Clone, Deserialize)]
pub struct NamePayload {
    pub name: String,
}

/// Body of a role assignment update; only the expiry can change
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryPayload {
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
}

/// Body of an access grant update, which carries nothing
#[derive(Debug, Clone, Deserialize)]
pub struct TouchPayload {}

impl Resource for User {
    const NAME: &'static str = "user";

    type Key = i32;
    type KeyQuery = IdQuery;
    type CreatePayload = UserPayload;
    type UpdatePayload = UserPayload;

    fn key_from_query(query: IdQuery) -> i32 {
        query.id
    }

    fn validate_key(id: &i32) -> Result<()> {
        FieldValidator::validate_id("id", *id)
    }

    fn from_create(payload: UserPayload) -> Self {
        User::new(payload.user_name, payload.mobile, payload.email_id)
    }

    fn from_update(id: i32, payload: UserPayload) -> Self {
        User {
            id,
            ..Self::from_create(payload)
        }
    }

    fn validate(&self) -> Result<()> {
        User::validate(self)
    }
}

impl Resource for Role {
    const NAME: &'static str = "role";

    type Key = i32;
    type KeyQuery = IdQuery;
    type CreatePayload = NamePayload;
    type UpdatePayload = NamePayload;

    fn key_from_query(query: IdQuery) -> i32 {
        query.id
    }

    fn validate_key(id: &i32) -> Result<()> {
        FieldValidator::validate_id("id", *id)
    }

    fn from_create(payload: NamePayload) -> Self {
        Role::new(payload.name)
    }

    fn from_update(id: i32, payload: NamePayload) -> Self {
        Role {
            id,
            name: payload.name,
        }
    }

    fn validate(&self) -> Result<()> {
        Role::validate(self)
    }
}

impl Resource for Access {
    const NAME: &'static str = "access";

    type Key = i32;
    type KeyQuery = IdQuery;
    type CreatePayload = NamePayload;
    type UpdatePayload = NamePayload;

    fn key_from_query(query: IdQuery) -> i32 {
        query.id
    }

    fn validate_key(id: &i32) -> Result<()> {
        FieldValidator::validate_id("id", *id)
    }

    fn from_create(payload: NamePayload) -> Self {
        Access::new(payload.name)
    }

    fn from_update(id: i32, payload: NamePayload) -> Self {
        Access {
            id,
            name: payload.name,
        }
    }

    fn validate(&self) -> Result<()> {
        Access::validate(self)
    }
}

impl Resource for UserRole {
    const NAME: &'static str = "role assignment";

    type Key = UserRoleKey;
    type KeyQuery = UserRoleKey;
    type CreatePayload = UserRole;
    type UpdatePayload = ExpiryPayload;

    fn key_from_query(key: UserRoleKey) -> UserRoleKey {
        key
    }

    fn validate_key(key: &UserRoleKey) -> Result<()> {
        key.validate()
    }

    fn from_create(payload: UserRole) -> Self {
        payload
    }

    fn from_update(key: UserRoleKey, payload: ExpiryPayload) -> Self {
        UserRole::new(key.user_id, key.role_id, payload.expiry_date)
    }

    fn validate(&self) -> Result<()> {
        UserRole::validate(self)
    }
}

impl Resource for RoleAccess {
    const NAME: &'static str = "access grant";

    type Key = RoleAccessKey;
    type KeyQuery = RoleAccessKey;
    type CreatePayload = RoleAccess;
    type UpdatePayload = TouchPayload;

    fn key_from_query(key: RoleAccessKey) -> RoleAccessKey {
        key
    }

    fn validate_key(key: &RoleAccessKey) -> Result<()> {
        key.validate()
    }

    fn from_create(payload: RoleAccess) -> Self {
        payload
    }

    fn from_update(key: RoleAccessKey, _payload: TouchPayload) -> Self {
        RoleAccess::new(key.role_id, key.access_id)
    }

    fn validate(&self) -> Result<()> {
        RoleAccess::validate(self)
    }
}
