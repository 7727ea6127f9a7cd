use crate::core::models::{RoleAccess, RoleAccessKey};
use crate::utils::error::{RbacError, Result};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, role_access};
use super::super::store::EntityStore;
use super::types::{SeaOrmDatabase, now};

#[async_trait]
impl EntityStore<RoleAccess> for SeaOrmDatabase {
    type Key = RoleAccessKey;

    async fn create(&self, record: &mut RoleAccess) -> Result<()> {
        debug!("Granting access: {}", record.key());

        entities::RoleAccess::insert(role_access::ActiveModel::for_insert(record, now()))
            .exec_without_returning(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        Ok(())
    }

    async fn get(&self, key: RoleAccessKey) -> Result<RoleAccess> {
        debug!("Finding access grant: {}", key);

        entities::RoleAccess::find_by_id((key.role_id, key.access_id))
            .one(&self.db)
            .await
            .map_err(RbacError::from_db)?
            .map(|model| model.to_domain())
            .ok_or_else(|| RbacError::not_found(format!("Access grant {} not found", key)))
    }

    // Both columns form the key, so an update can only refresh the audit
    // timestamp of an existing grant.
    async fn update(&self, record: &RoleAccess) -> Result<()> {
        debug!("Touching access grant: {}", record.key());

        let result = entities::RoleAccess::update_many()
            .set(role_access::ActiveModel::touch(now()))
            .filter(role_access::Column::RoleId.eq(record.role_id))
            .filter(role_access::Column::AccessId.eq(record.access_id))
            .exec(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        if result.rows_affected == 0 {
            return Err(RbacError::not_found(format!(
                "Access grant {} not found",
                record.key()
            )));
        }

        Ok(())
    }

    async fn delete(&self, key: RoleAccessKey) -> Result<()> {
        debug!("Revoking access grant: {}", key);

        entities::RoleAccess::delete_by_id((key.role_id, key.access_id))
            .exec(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<RoleAccess>> {
        let grants = entities::RoleAccess::find()
            .order_by_asc(role_access::Column::RoleId)
            .order_by_asc(role_access::Column::AccessId)
            .all(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        Ok(grants.iter().map(role_access::Model::to_domain).collect())
    }
}
