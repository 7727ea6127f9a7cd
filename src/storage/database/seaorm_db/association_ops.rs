//! Lookups backing the association resolver
//!
//! Every lookup runs on a [`ReadSnapshot`], so a resolver that chains several
//! queries sees one consistent state of the association tables even while
//! roles or accesses are deleted concurrently.

use crate::core::models::{Access, Role, RoleAccess, User, UserRole};
use crate::utils::error::{RbacError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, access, role, role_access, user_role};
use super::types::{DatabaseBackendType, SeaOrmDatabase};

/// Read transaction shared by the queries of one resolution
#[derive(Debug)]
pub struct ReadSnapshot {
    txn: DatabaseTransaction,
}

impl SeaOrmDatabase {
    /// Open a read transaction.
    ///
    /// PostgreSQL needs `REPEATABLE READ` to keep one snapshot across
    /// statements. A deferred SQLite transaction holds its read snapshot from
    /// the first query until commit.
    pub async fn read_snapshot(&self) -> Result<ReadSnapshot> {
        let txn = match self.backend_type {
            DatabaseBackendType::PostgreSQL => {
                self.db
                    .begin_with_config(
                        Some(IsolationLevel::RepeatableRead),
                        Some(AccessMode::ReadOnly),
                    )
                    .await
            }
            DatabaseBackendType::SQLite => self.db.begin().await,
        }
        .map_err(RbacError::from_db)?;

        Ok(ReadSnapshot { txn })
    }
}

impl ReadSnapshot {
    /// Release the snapshot
    pub async fn finish(self) -> Result<()> {
        self.txn.commit().await.map_err(RbacError::from_db)
    }

    /// A user together with every role assignment referencing it
    pub async fn user_with_assignments(
        &self,
        user_id: i32,
    ) -> Result<Option<(User, Vec<UserRole>)>> {
        debug!("Loading role assignments of user {}", user_id);

        let Some(user) = entities::User::find_by_id(user_id)
            .one(&self.txn)
            .await
            .map_err(RbacError::from_db)?
        else {
            return Ok(None);
        };

        let assignments = user
            .find_related(entities::UserRole)
            .order_by_asc(user_role::Column::RoleId)
            .all(&self.txn)
            .await
            .map_err(RbacError::from_db)?;

        Ok(Some((
            user.to_domain(),
            assignments.iter().map(user_role::Model::to_domain).collect(),
        )))
    }

    /// A role together with every access grant referencing it
    pub async fn role_with_grants(
        &self,
        role_id: i32,
    ) -> Result<Option<(Role, Vec<RoleAccess>)>> {
        debug!("Loading access grants of role {}", role_id);

        let Some(role) = entities::Role::find_by_id(role_id)
            .one(&self.txn)
            .await
            .map_err(RbacError::from_db)?
        else {
            return Ok(None);
        };

        let grants = role
            .find_related(entities::RoleAccess)
            .order_by_asc(role_access::Column::AccessId)
            .all(&self.txn)
            .await
            .map_err(RbacError::from_db)?;

        Ok(Some((
            role.to_domain(),
            grants.iter().map(role_access::Model::to_domain).collect(),
        )))
    }

    /// Access grants of any of the given roles
    pub async fn grants_for_roles(&self, role_ids: &[i32]) -> Result<Vec<RoleAccess>> {
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let grants = entities::RoleAccess::find()
            .filter(role_access::Column::RoleId.is_in(role_ids.iter().copied()))
            .order_by_asc(role_access::Column::RoleId)
            .order_by_asc(role_access::Column::AccessId)
            .all(&self.txn)
            .await
            .map_err(RbacError::from_db)?;

        Ok(grants.iter().map(role_access::Model::to_domain).collect())
    }

    /// Roles whose id is in `role_ids`; ids without a row are simply absent
    pub async fn roles_by_ids(&self, role_ids: &[i32]) -> Result<Vec<Role>> {
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let roles = entities::Role::find()
            .filter(role::Column::RoleId.is_in(role_ids.iter().copied()))
            .order_by_asc(role::Column::RoleId)
            .all(&self.txn)
            .await
            .map_err(RbacError::from_db)?;

        Ok(roles.iter().map(role::Model::to_domain).collect())
    }

    /// Accesses whose id is in `access_ids`; ids without a row are simply absent
    pub async fn accesses_by_ids(&self, access_ids: &[i32]) -> Result<Vec<Access>> {
        if access_ids.is_empty() {
            return Ok(Vec::new());
        }

        let accesses = entities::Access::find()
            .filter(access::Column::AccessId.is_in(access_ids.iter().copied()))
            .order_by_asc(access::Column::AccessId)
            .all(&self.txn)
            .await
            .map_err(RbacError::from_db)?;

        Ok(accesses.iter().map(access::Model::to_domain).collect())
    }
}
