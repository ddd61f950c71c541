use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260106_000007_create_subject_table::Subject, m20260106_000005_create_specialty_table::Specialty};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubjectSpecialty::Table)
                    .if_not_exists()
                    .col(uuid(SubjectSpecialty::SubjectId))
                    .col(uuid(SubjectSpecialty::SpecialtyId))
                    .primary_key(
                        Index::create()
                            .name("pk_subject_specialty")
                            .col(SubjectSpecialty::SubjectId)
                            .col(SubjectSpecialty::SpecialtyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_specialty_subject_id")
                            .from(SubjectSpecialty::Table, SubjectSpecialty::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_specialty_specialty_id")
                            .from(SubjectSpecialty::Table, SubjectSpecialty::SpecialtyId)
                            .to(Specialty::Table, Specialty::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubjectSpecialty::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubjectSpecialty {
    Table,
    SubjectId,
    SpecialtyId,
}
