use crate::core::models::Access;
use crate::utils::error::{RbacError, Result};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, access};
use super::super::store::EntityStore;
use super::types::{SeaOrmDatabase, now};

#[async_trait]
impl EntityStore<Access> for SeaOrmDatabase {
    type Key = i32;

    async fn create(&self, record: &mut Access) -> Result<()> {
        debug!("Creating access: {}", record.name);

        let result = entities::Access::insert(access::ActiveModel::for_insert(record, now()))
            .exec(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        record.id = result.last_insert_id;
        Ok(())
    }

    async fn get(&self, access_id: i32) -> Result<Access> {
        debug!("Finding access by ID: {}", access_id);

        entities::Access::find_by_id(access_id)
            .one(&self.db)
            .await
            .map_err(RbacError::from_db)?
            .map(|model| model.to_domain())
            .ok_or_else(|| RbacError::not_found(format!("Access {} not found", access_id)))
    }

    async fn update(&self, record: &Access) -> Result<()> {
        debug!("Updating access: {}", record.id);

        let result = entities::Access::update_many()
            .set(access::ActiveModel::for_update(record, now()))
            .filter(access::Column::AccessId.eq(record.id))
            .exec(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        if result.rows_affected == 0 {
            return Err(RbacError::not_found(format!(
                "Access {} not found",
                record.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, access_id: i32) -> Result<()> {
        debug!("Deleting access: {}", access_id);

        entities::Access::delete_by_id(access_id)
            .exec(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Access>> {
        let accesses = entities::Access::find()
            .order_by_asc(access::Column::AccessId)
            .all(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        Ok(accesses.iter().map(access::Model::to_domain).collect())
    }
}
