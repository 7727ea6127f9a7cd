use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_roles_table::Roles;
use super::m20240101_000003_create_access_table::Access;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessRole::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AccessRole::RoleId).integer().not_null())
                    .col(ColumnDef::new(AccessRole::AccessId).integer().not_null())
                    .col(
                        ColumnDef::new(AccessRole::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccessRole::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_access_role")
                            .col(AccessRole::RoleId)
                            .col(AccessRole::AccessId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_access_role_role_id")
                            .from(AccessRole::Table, AccessRole::RoleId)
                            .to(Roles::Table, Roles::RoleId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_access_role_access_id")
                            .from(AccessRole::Table, AccessRole::AccessId)
                            .to(Access::Table, Access::AccessId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_access_role_access_id")
                    .table(AccessRole::Table)
                    .col(AccessRole::AccessId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AccessRole {
    Table,
    RoleId,
    AccessId,
    CreatedAt,
    UpdatedAt,
}
