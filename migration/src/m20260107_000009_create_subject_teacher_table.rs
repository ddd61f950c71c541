use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260106_000007_create_subject_table::Subject, m20260105_000004_create_teacher_table::Teacher};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubjectTeacher::Table)
                    .if_not_exists()
                    .col(uuid(SubjectTeacher::SubjectId))
                    .col(uuid(SubjectTeacher::TeacherId))
                    .primary_key(
                        Index::create()
                            .name("pk_subject_teacher")
                            .col(SubjectTeacher::SubjectId)
                            .col(SubjectTeacher::TeacherId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_teacher_subject_id")
                            .from(SubjectTeacher::Table, SubjectTeacher::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_teacher_teacher_id")
                            .from(SubjectTeacher::Table, SubjectTeacher::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubjectTeacher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubjectTeacher {
    Table,
    SubjectId,
    TeacherId,
}
