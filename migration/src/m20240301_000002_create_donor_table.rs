use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000001_create_blood_type_table::BloodType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donor::Table)
                    .if_not_exists()
                    .col(pk_auto(Donor::Id))
                    .col(string_uniq(Donor::Pesel))
                    .col(string(Donor::FirstName))
                    .col(string(Donor::LastName))
                    .col(integer(Donor::BloodTypeId))
                    .col(string(Donor::PhoneNumber))
                    .col(string_null(Donor::Email))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donor_blood_type_id")
                            .from(Donor::Table, Donor::BloodTypeId)
                            .to(BloodType::Table, BloodType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Donor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Donor {
    Table,
    Id,
    Pesel,
    FirstName,
    LastName,
    BloodTypeId,
    PhoneNumber,
    Email,
}
