pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_blood_type_table;
mod m20240301_000002_create_donor_table;
mod m20240301_000003_create_personnel_table;
mod m20240301_000004_create_blood_donation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_blood_type_table::Migration),
            Box::new(m20240301_000002_create_donor_table::Migration),
            Box::new(m20240301_000003_create_personnel_table::Migration),
            Box::new(m20240301_000004_create_blood_donation_table::Migration),
        ]
    }
}
