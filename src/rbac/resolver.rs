use super::helpers::{active_role_ids, dedup_ids, distinct_names, ensure_all_present};
use crate::core::models::{Access, Role};
use crate::storage::{Database, ReadSnapshot};
use crate::utils::error::{RbacError, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

/// Resolves roles and accesses through the association tables
#[derive(Debug, Clone)]
pub struct AssociationResolver {
    store: Arc<Database>,
}

impl AssociationResolver {
    pub fn new(store: Arc<Database>) -> Self {
        Self { store }
    }

    /// Accesses granted to a role, ordered by access id.
    ///
    /// Fails with `NotFound` when the role does not exist and with an
    /// integrity error when a grant points at a missing access.
    pub async fn role_accesses_for_role(&self, role_id: i32) -> Result<Vec<Access>> {
        debug!("Resolving accesses of role {}", role_id);

        let snapshot = self.store.read_snapshot().await?;
        let accesses = role_accesses(&snapshot, role_id).await;
        snapshot.finish().await?;
        accesses
    }

    /// Roles currently held by a user
    pub async fn user_roles_for_user(&self, user_id: i32) -> Result<Vec<Role>> {
        self.user_roles_for_user_at(user_id, Utc::now()).await
    }

    /// Roles held by a user at `now`, ordered by role id
    pub async fn user_roles_for_user_at(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<Role>> {
        debug!("Resolving roles of user {} at {}", user_id, now);

        let snapshot = self.store.read_snapshot().await?;
        let roles = user_roles(&snapshot, user_id, now).await;
        snapshot.finish().await?;
        roles
    }

    /// Distinct access names a user currently holds through any role
    pub async fn access_names_for_user(&self, user_id: i32) -> Result<Vec<String>> {
        self.access_names_for_user_at(user_id, Utc::now()).await
    }

    /// Distinct access names a user holds at `now`, sorted by name
    pub async fn access_names_for_user_at(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<String>> {
        debug!("Resolving access names of user {} at {}", user_id, now);

        let snapshot = self.store.read_snapshot().await?;
        let names = access_names(&snapshot, user_id, now).await;
        snapshot.finish().await?;
        names
    }
}

async fn role_accesses(snapshot: &ReadSnapshot, role_id: i32) -> Result<Vec<Access>> {
    let (_role, grants) = snapshot
        .role_with_grants(role_id)
        .await?
        .ok_or_else(|| RbacError::not_found(format!("Role {} not found", role_id)))?;

    let access_ids = dedup_ids(grants.iter().map(|grant| grant.access_id));
    let accesses = snapshot.accesses_by_ids(&access_ids).await?;
    ensure_all_present("access", &access_ids, accesses.iter().map(|a| a.id))?;

    Ok(accesses)
}

async fn user_roles(
    snapshot: &ReadSnapshot,
    user_id: i32,
    now: DateTime<Utc>,
) -> Result<Vec<Role>> {
    let role_ids = assigned_role_ids(snapshot, user_id, now).await?;
    let roles = snapshot.roles_by_ids(&role_ids).await?;
    ensure_all_present("role", &role_ids, roles.iter().map(|r| r.id))?;

    Ok(roles)
}

async fn access_names(
    snapshot: &ReadSnapshot,
    user_id: i32,
    now: DateTime<Utc>,
) -> Result<Vec<String>> {
    let role_ids = assigned_role_ids(snapshot, user_id, now).await?;
    if role_ids.is_empty() {
        return Ok(Vec::new());
    }

    let roles = snapshot.roles_by_ids(&role_ids).await?;
    ensure_all_present("role", &role_ids, roles.iter().map(|r| r.id))?;

    let grants = snapshot.grants_for_roles(&role_ids).await?;
    let access_ids = dedup_ids(grants.iter().map(|grant| grant.access_id));
    let accesses = snapshot.accesses_by_ids(&access_ids).await?;
    ensure_all_present("access", &access_ids, accesses.iter().map(|a| a.id))?;

    Ok(distinct_names(&accesses))
}

async fn assigned_role_ids(
    snapshot: &ReadSnapshot,
    user_id: i32,
    now: DateTime<Utc>,
) -> Result<Vec<i32>> {
    let (_user, assignments) = snapshot
        .user_with_assignments(user_id)
        .await?
        .ok_or_else(|| RbacError::not_found(format!("User {} not found", user_id)))?;

    Ok(active_role_ids(&assignments, now))
}
