use crate::core::models;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Role assignment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user_roles")]
pub struct Model {
    /// Assigned user
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,

    /// Assigned role
    #[sea_orm(primary_key, auto_increment = false)]
    pub role_id: i32,

    /// Assignment expiry (never expires when null)
    pub expiry_date: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

/// Role assignment relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to user relation
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId",
        on_delete = "Cascade"
    )]
    User,

    /// Belongs to role relation
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::RoleId",
        on_delete = "Cascade"
    )]
    Role,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> models::UserRole {
        models::UserRole {
            user_id: self.user_id,
            role_id: self.role_id,
            expiry_date: self.expiry_date.map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl ActiveModel {
    pub fn for_insert(assignment: &models::UserRole, now: DateTimeWithTimeZone) -> Self {
        Self {
            user_id: Set(assignment.user_id),
            role_id: Set(assignment.role_id),
            expiry_date: Set(assignment.expiry_date.map(Into::into)),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// Only the expiry is mutable; the pair itself is the key
    pub fn for_update(assignment: &models::UserRole, now: DateTimeWithTimeZone) -> Self {
        Self {
            user_id: NotSet,
            role_id: NotSet,
            expiry_date: Set(assignment.expiry_date.map(Into::into)),
            created_at: NotSet,
            updated_at: Set(now),
        }
    }
}
