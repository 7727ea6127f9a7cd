use crate::core::models;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Role database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub role_id: i32,

    /// Role name (unique)
    #[sea_orm(unique)]
    pub role_name: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

/// Role entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRoles,

    #[sea_orm(has_many = "super::role_access::Entity")]
    RoleAccesses,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl Related<super::role_access::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleAccesses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> models::Role {
        models::Role {
            id: self.role_id,
            name: self.role_name.clone(),
        }
    }
}

impl ActiveModel {
    pub fn for_insert(role: &models::Role, now: DateTimeWithTimeZone) -> Self {
        Self {
            role_id: NotSet,
            role_name: Set(role.name.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    pub fn for_update(role: &models::Role, now: DateTimeWithTimeZone) -> Self {
        Self {
            role_id: NotSet,
            role_name: Set(role.name.clone()),
            created_at: NotSet,
            updated_at: Set(now),
        }
    }
}
