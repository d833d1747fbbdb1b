//! Baseline data inserted at boot.
//!
//! Seeding is check-before-insert: each row is only written when no row with
//! the same natural key exists, so running it on every start is safe.

use crate::server::{
    auth::encrypter::Encrypter,
    config::SeedConfig,
    data::store::Store,
    error::AppError,
    model::{blood_type::CreateBloodTypeParam, personnel::CreatePersonnelParam},
    service::personnel::PersonnelService,
};

/// The eight ABO/Rh blood groups.
pub const BLOOD_TYPES: [&str; 8] = [
    "0 Rh-", "0 Rh+", "A Rh-", "A Rh+", "B Rh-", "B Rh+", "AB Rh-", "AB Rh+",
];

/// What a seeding run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub blood_types_inserted: usize,
    pub personnel_inserted: bool,
}

/// Inserts missing baseline rows.
///
/// # Returns
/// - `Ok(SeedReport)` - Counts of inserted rows, zero on a fully seeded store
/// - `Err(AppError)` - Backend failure, or an invalid configured personnel account
pub async fn seed(
    store: &Store,
    encrypter: &Encrypter,
    config: &SeedConfig,
) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    let blood_types = store.blood_types();
    for name in BLOOD_TYPES {
        if blood_types.find_by_key(name).await?.is_none() {
            blood_types
                .create(CreateBloodTypeParam {
                    name: name.to_string(),
                })
                .await?;
            report.blood_types_inserted += 1;
        }
    }

    if let Some((pesel, password)) = &config.personnel {
        if store.personnel().find_by_key(pesel).await?.is_none() {
            PersonnelService::new(store, encrypter)
                .create(CreatePersonnelParam {
                    pesel: pesel.clone(),
                    first_name: "Administrator".to_string(),
                    last_name: "Account".to_string(),
                    password: password.clone(),
                })
                .await?;
            report.personnel_inserted = true;
        }
    }

    tracing::info!(
        "Seeding complete: {} blood types inserted, personnel inserted: {}",
        report.blood_types_inserted,
        report.personnel_inserted
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    fn seed_config() -> SeedConfig {
        SeedConfig {
            personnel: Some(("44051401359".to_string(), "initial-password".to_string())),
        }
    }

    async fn stores() -> Vec<Store> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        vec![Store::Relational(test.db.unwrap()), Store::in_memory()]
    }

    /// Expected: second run inserts nothing, one baseline set on both backends
    #[tokio::test]
    async fn seeding_twice_is_idempotent() -> Result<(), AppError> {
        let encrypter = Encrypter::new(10);

        for store in stores().await {
            let first = seed(&store, &encrypter, &seed_config()).await?;
            let second = seed(&store, &encrypter, &seed_config()).await?;

            assert_eq!(first.blood_types_inserted, BLOOD_TYPES.len());
            assert!(first.personnel_inserted);
            assert_eq!(second, SeedReport::default());

            let names: Vec<String> = store
                .blood_types()
                .list()
                .await?
                .into_iter()
                .map(|b| b.name)
                .collect();
            assert_eq!(names, BLOOD_TYPES.map(str::to_string).to_vec());
            assert_eq!(store.personnel().list().await?.len(), 1);
        }

        Ok(())
    }

    /// Expected: only the missing blood types are added to a partly seeded store
    #[tokio::test]
    async fn fills_gaps_only() -> Result<(), AppError> {
        let store = Store::in_memory();
        store
            .blood_types()
            .create(CreateBloodTypeParam {
                name: "AB Rh+".to_string(),
            })
            .await?;

        let report = seed(&store, &Encrypter::new(10), &SeedConfig::default()).await?;

        assert_eq!(report.blood_types_inserted, BLOOD_TYPES.len() - 1);
        assert!(!report.personnel_inserted);
        assert_eq!(store.blood_types().list().await?.len(), BLOOD_TYPES.len());
        assert!(store.personnel().list().await?.is_empty());

        Ok(())
    }

    /// Expected: the seeded account's password verifies
    #[tokio::test]
    async fn seeded_personnel_can_authenticate() -> Result<(), AppError> {
        let store = Store::in_memory();
        let encrypter = Encrypter::new(10);

        seed(&store, &encrypter, &seed_config()).await?;
        let personnel = store
            .personnel()
            .find_by_key("44051401359")
            .await?
            .unwrap();

        assert!(encrypter.verify("initial-password", &personnel.salt, &personnel.password_hash));

        Ok(())
    }
}
