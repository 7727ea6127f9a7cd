use crate::core::models;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID (auto increment)
    #[sea_orm(primary_key)]
    pub user_id: i32,

    /// Username (unique)
    #[sea_orm(unique)]
    pub user_name: String,

    /// Mobile number
    pub mobile: String,

    /// Email address
    pub email_id: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// User entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Role assignments relation
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRoles,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain user model
    pub fn to_domain(&self) -> models::User {
        models::User {
            id: self.user_id,
            user_name: self.user_name.clone(),
            mobile: self.mobile.clone(),
            email_id: self.email_id.clone(),
        }
    }
}

impl ActiveModel {
    /// Active model for an INSERT; the id is left to the store
    pub fn for_insert(user: &models::User, now: DateTimeWithTimeZone) -> Self {
        Self {
            user_id: NotSet,
            user_name: Set(user.user_name.clone()),
            mobile: Set(user.mobile.clone()),
            email_id: Set(user.email_id.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// Active model carrying only the mutable columns
    pub fn for_update(user: &models::User, now: DateTimeWithTimeZone) -> Self {
        Self {
            user_id: NotSet,
            user_name: Set(user.user_name.clone()),
            mobile: Set(user.mobile.clone()),
            email_id: Set(user.email_id.clone()),
            created_at: NotSet,
            updated_at: Set(now),
        }
    }
}
