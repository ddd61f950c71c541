use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000004_create_teacher_table::Teacher,
    m20260106_000005_create_specialty_table::Specialty,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Group::Table)
                    .if_not_exists()
                    .col(pk_uuid(Group::Id))
                    .col(string_len(Group::Name, 100))
                    .col(integer(Group::Year))
                    .col(small_integer(Group::CreditsPerStudent))
                    .col(uuid_null(Group::CuratorId))
                    .col(uuid_null(Group::SpecialtyId))
                    .col(timestamp_with_time_zone(Group::CreatedOn))
                    .col(timestamp_with_time_zone(Group::UpdatedOn))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_curator_id")
                            .from(Group::Table, Group::CuratorId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_specialty_id")
                            .from(Group::Table, Group::SpecialtyId)
                            .to(Specialty::Table, Specialty::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_group_name_year")
                            .col(Group::Name)
                            .col(Group::Year),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Group::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Group {
    Table,
    Id,
    Name,
    Year,
    CreditsPerStudent,
    CuratorId,
    SpecialtyId,
    CreatedOn,
    UpdatedOn,
}
