use crate::core::models;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Access grant database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "access_role")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub role_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub access_id: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

/// Access grant relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::RoleId",
        on_delete = "Cascade"
    )]
    Role,

    #[sea_orm(
        belongs_to = "super::access::Entity",
        from = "Column::AccessId",
        to = "super::access::Column::AccessId",
        on_delete = "Cascade"
    )]
    Access,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl Related<super::access::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Access.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> models::RoleAccess {
        models::RoleAccess {
            role_id: self.role_id,
            access_id: self.access_id,
        }
    }
}

impl ActiveModel {
    pub fn for_insert(grant: &models::RoleAccess, now: DateTimeWithTimeZone) -> Self {
        Self {
            role_id: Set(grant.role_id),
            access_id: Set(grant.access_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// A grant has no business column; updating it only touches `updated_at`
    pub fn touch(now: DateTimeWithTimeZone) -> Self {
        Self {
            role_id: NotSet,
            access_id: NotSet,
            created_at: NotSet,
            updated_at: Set(now),
        }
    }
}
