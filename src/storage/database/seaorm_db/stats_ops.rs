use crate::utils::error::{RbacError, Result};
use sea_orm::*;

use super::super::entities;
use super::types::{DatabaseStats, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Count the rows of every table
    pub async fn stats(&self) -> Result<DatabaseStats> {
        Ok(DatabaseStats {
            users: count(entities::User, &self.db).await?,
            roles: count(entities::Role, &self.db).await?,
            accesses: count(entities::Access, &self.db).await?,
            user_roles: count(entities::UserRole, &self.db).await?,
            role_accesses: count(entities::RoleAccess, &self.db).await?,
        })
    }
}

async fn count<E>(_entity: E, db: &DatabaseConnection) -> Result<u64>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    E::find().count(db).await.map_err(RbacError::from_db)
}
