use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000004_create_teacher_table::Teacher;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Specialty::Table)
                    .if_not_exists()
                    .col(pk_uuid(Specialty::Id))
                    .col(string_len(Specialty::Name, 100))
                    .col(integer(Specialty::Year))
                    .col(uuid_null(Specialty::TeacherId))
                    .col(timestamp_with_time_zone(Specialty::CreatedOn))
                    .col(timestamp_with_time_zone(Specialty::UpdatedOn))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_specialty_teacher_id")
                            .from(Specialty::Table, Specialty::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_specialty_name_year")
                            .col(Specialty::Name)
                            .col(Specialty::Year),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Specialty::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Specialty {
    Table,
    Id,
    Name,
    Year,
    TeacherId,
    CreatedOn,
    UpdatedOn,
}
