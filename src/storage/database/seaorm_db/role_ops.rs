use crate::core::models::Role;
use crate::utils::error::{RbacError, Result};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, role};
use super::super::store::EntityStore;
use super::types::{SeaOrmDatabase, now};

#[async_trait]
impl EntityStore<Role> for SeaOrmDatabase {
    type Key = i32;

    async fn create(&self, record: &mut Role) -> Result<()> {
        debug!("Creating role: {}", record.name);

        let result = entities::Role::insert(role::ActiveModel::for_insert(record, now()))
            .exec(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        record.id = result.last_insert_id;
        Ok(())
    }

    async fn get(&self, role_id: i32) -> Result<Role> {
        debug!("Finding role by ID: {}", role_id);

        entities::Role::find_by_id(role_id)
            .one(&self.db)
            .await
            .map_err(RbacError::from_db)?
            .map(|model| model.to_domain())
            .ok_or_else(|| RbacError::not_found(format!("Role {} not found", role_id)))
    }

    async fn update(&self, record: &Role) -> Result<()> {
        debug!("Updating role: {}", record.id);

        let result = entities::Role::update_many()
            .set(role::ActiveModel::for_update(record, now()))
            .filter(role::Column::RoleId.eq(record.id))
            .exec(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        if result.rows_affected == 0 {
            return Err(RbacError::not_found(format!(
                "Role {} not found",
                record.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, role_id: i32) -> Result<()> {
        debug!("Deleting role: {}", role_id);

        entities::Role::delete_by_id(role_id)
            .exec(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Role>> {
        let roles = entities::Role::find()
            .order_by_asc(role::Column::RoleId)
            .all(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        Ok(roles.iter().map(role::Model::to_domain).collect())
    }
}
