use crate::core::models::User;
use crate::utils::error::{RbacError, Result};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user};
use super::super::store::EntityStore;
use super::types::{SeaOrmDatabase, now};

#[async_trait]
impl EntityStore<User> for SeaOrmDatabase {
    type Key = i32;

    async fn create(&self, record: &mut User) -> Result<()> {
        debug!("Creating user: {}", record.user_name);

        let result = entities::User::insert(user::ActiveModel::for_insert(record, now()))
            .exec(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        record.id = result.last_insert_id;
        debug!("Created user {} with id {}", record.user_name, record.id);
        Ok(())
    }

    async fn get(&self, user_id: i32) -> Result<User> {
        debug!("Finding user by ID: {}", user_id);

        entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(RbacError::from_db)?
            .map(|model| model.to_domain())
            .ok_or_else(|| RbacError::not_found(format!("User {} not found", user_id)))
    }

    async fn update(&self, record: &User) -> Result<()> {
        debug!("Updating user: {}", record.id);

        let result = entities::User::update_many()
            .set(user::ActiveModel::for_update(record, now()))
            .filter(user::Column::UserId.eq(record.id))
            .exec(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        if result.rows_affected == 0 {
            return Err(RbacError::not_found(format!(
                "User {} not found",
                record.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, user_id: i32) -> Result<()> {
        debug!("Deleting user: {}", user_id);

        let result = entities::User::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        debug!("Deleted {} user row(s)", result.rows_affected);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<User>> {
        let users = entities::User::find()
            .order_by_asc(user::Column::UserId)
            .all(&self.db)
            .await
            .map_err(RbacError::from_db)?;

        Ok(users.iter().map(user::Model::to_domain).collect())
    }
}
