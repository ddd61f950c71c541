use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Position::Table)
                    .if_not_exists()
                    .col(pk_uuid(Position::Id))
                    .col(string_len_uniq(Position::PositionName, 50))
                    .col(timestamp_with_time_zone(Position::CreatedOn))
                    .col(timestamp_with_time_zone(Position::UpdatedOn))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Position::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Position {
    Table,
    Id,
    PositionName,
    CreatedOn,
    UpdatedOn,
}
