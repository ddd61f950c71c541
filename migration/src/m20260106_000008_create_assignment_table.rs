use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000007_create_subject_table::Subject;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(pk_uuid(Assignment::Id))
                    .col(string_len(Assignment::Name, 100))
                    .col(small_integer(Assignment::MaxMark))
                    .col(timestamp_with_time_zone_null(Assignment::Deadline))
                    .col(uuid(Assignment::SubjectId))
                    .col(timestamp_with_time_zone(Assignment::CreatedOn))
                    .col(timestamp_with_time_zone(Assignment::UpdatedOn))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_subject_id")
                            .from(Assignment::Table, Assignment::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_assignment_subject_id_name")
                            .col(Assignment::SubjectId)
                            .col(Assignment::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Assignment {
    Table,
    Id,
    Name,
    MaxMark,
    Deadline,
    SubjectId,
    CreatedOn,
    UpdatedOn,
}
