use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260106_000007_create_subject_table::Subject, m20260106_000006_create_group_table::Group};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubjectGroup::Table)
                    .if_not_exists()
                    .col(uuid(SubjectGroup::SubjectId))
                    .col(uuid(SubjectGroup::GroupId))
                    .primary_key(
                        Index::create()
                            .name("pk_subject_group")
                            .col(SubjectGroup::SubjectId)
                            .col(SubjectGroup::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_group_subject_id")
                            .from(SubjectGroup::Table, SubjectGroup::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_group_group_id")
                            .from(SubjectGroup::Table, SubjectGroup::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubjectGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubjectGroup {
    Table,
    SubjectId,
    GroupId,
}
