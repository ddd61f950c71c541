use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(pk_uuid(Subject::Id))
                    .col(string_len(Subject::Name, 100))
                    .col(integer(Subject::Year))
                    .col(small_integer(Subject::Credits))
                    .col(timestamp_with_time_zone(Subject::CreatedOn))
                    .col(timestamp_with_time_zone(Subject::UpdatedOn))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_subject_name_year")
                            .col(Subject::Name)
                            .col(Subject::Year),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subject {
    Table,
    Id,
    Name,
    Year,
    Credits,
    CreatedOn,
    UpdatedOn,
}
