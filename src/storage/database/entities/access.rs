use crate::core::models;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Access (named permission) database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "access")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub access_id: i32,

    /// Access name (unique)
    #[sea_orm(unique)]
    pub access_name: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

/// Access entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_access::Entity")]
    RoleAccesses,
}

impl Related<super::role_access::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleAccesses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> models::Access {
        models::Access {
            id: self.access_id,
            name: self.access_name.clone(),
        }
    }
}

impl ActiveModel {
    pub fn for_insert(access: &models::Access, now: DateTimeWithTimeZone) -> Self {
        Self {
            access_id: NotSet,
            access_name: Set(access.name.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    pub fn for_update(access: &models::Access, now: DateTimeWithTimeZone) -> Self {
        Self {
            access_id: NotSet,
            access_name: Set(access.name.clone()),
            created_at: NotSet,
            updated_at: Set(now),
        }
    }
}
