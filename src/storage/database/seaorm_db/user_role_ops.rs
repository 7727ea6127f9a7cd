use crate::core::models::{UserRole, UserRoleKey};
use crate::utils::error::{RbacError, Result};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user_role};
use super::super::store::EntityStore;
use super::types::{SeaOrmDatabase, now};

#[async_trait]
impl EntityStore<UserRole> for SeaOrmDatabase {
    type Key = UserRoleKey;

    async fn create(&self, record: &mut UserRole) -> Result<()> {
        debug!("Assigning role: {}", record.key());

        entities::UserRole::insert(user_role::ActiveModel::for_insert(record, now()))
            .exec_without_returning(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        Ok(())
    }

    async fn get(&self, key: UserRoleKey) -> Result<UserRole> {
        debug!("Finding role assignment: {}", key);

        entities::UserRole::find_by_id((key.user_id, key.role_id))
            .one(&self.db)
            .await
            .map_err(RbacError::from_db)?
            .map(|model| model.to_domain())
            .ok_or_else(|| RbacError::not_found(format!("Role assignment {} not found", key)))
    }

    async fn update(&self, record: &UserRole) -> Result<()> {
        debug!("Updating role assignment: {}", record.key());

        let result = entities::UserRole::update_many()
            .set(user_role::ActiveModel::for_update(record, now()))
            .filter(user_role::Column::UserId.eq(record.user_id))
            .filter(user_role::Column::RoleId.eq(record.role_id))
            .exec(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        if result.rows_affected == 0 {
            return Err(RbacError::not_found(format!(
                "Role assignment {} not found",
                record.key()
            )));
        }

        Ok(())
    }

    async fn delete(&self, key: UserRoleKey) -> Result<()> {
        debug!("Removing role assignment: {}", key);

        entities::UserRole::delete_by_id((key.user_id, key.role_id))
            .exec(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<UserRole>> {
        let assignments = entities::UserRole::find()
            .order_by_asc(user_role::Column::UserId)
            .order_by_asc(user_role::Column::RoleId)
            .all(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        Ok(assignments.iter().map(user_role::Model::to_domain).collect())
    }
}
