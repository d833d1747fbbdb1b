use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240301_000002_create_donor_table::Donor, m20240301_000003_create_personnel_table::Personnel,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BloodDonation::Table)
                    .if_not_exists()
                    .col(pk_auto(BloodDonation::Id))
                    .col(integer(BloodDonation::DonorId))
                    .col(integer(BloodDonation::PersonnelId))
                    .col(timestamp_with_time_zone(BloodDonation::DonatedAt))
                    .col(integer(BloodDonation::VolumeMl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blood_donation_donor_id")
                            .from(BloodDonation::Table, BloodDonation::DonorId)
                            .to(Donor::Table, Donor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blood_donation_personnel_id")
                            .from(BloodDonation::Table, BloodDonation::PersonnelId)
                            .to(Personnel::Table, Personnel::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BloodDonation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BloodDonation {
    Table,
    Id,
    DonorId,
    PersonnelId,
    DonatedAt,
    VolumeMl,
}
