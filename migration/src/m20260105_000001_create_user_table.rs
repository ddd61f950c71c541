use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_uuid(User::Id))
                    .col(string_len_uniq(User::Email, 320))
                    .col(string_len(User::FirstName, 60))
                    .col(string_len(User::LastName, 80))
                    .col(string(User::Password))
                    .col(small_integer_null(User::Age))
                    .col(boolean(User::IsActive).default(true))
                    .col(string_len(User::Role, 16))
                    .col(timestamp_with_time_zone(User::CreatedOn))
                    .col(timestamp_with_time_zone(User::UpdatedOn))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    Password,
    Age,
    IsActive,
    Role,
    CreatedOn,
    UpdatedOn,
}
