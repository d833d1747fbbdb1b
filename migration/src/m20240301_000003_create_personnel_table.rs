use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Personnel::Table)
                    .if_not_exists()
                    .col(pk_auto(Personnel::Id))
                    .col(string_uniq(Personnel::Pesel))
                    .col(string(Personnel::FirstName))
                    .col(string(Personnel::LastName))
                    .col(string(Personnel::PasswordHash))
                    .col(string(Personnel::Salt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Personnel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Personnel {
    Table,
    Id,
    Pesel,
    FirstName,
    LastName,
    PasswordHash,
    Salt,
}
