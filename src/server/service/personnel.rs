use crate::server::{
    auth::encrypter::Encrypter,
    data::store::Store,
    error::{persistence::PersistenceError, AppError},
    model::personnel::{
        CreatePersonnelParam, NewPersonnel, Personnel, PersonnelChanges, UpdatePersonnelParam,
    },
    service::donor::validate_names,
    util::pesel::validate_pesel,
};

const MIN_PASSWORD_LEN: usize = 8;

/// Manages staff accounts. Passwords are hashed with a fresh salt whenever
/// they are set.
pub struct PersonnelService<'a> {
    store: &'a Store,
    encrypter: &'a Encrypter,
}

impl<'a> PersonnelService<'a> {
    pub fn new(store: &'a Store, encrypter: &'a Encrypter) -> Self {
        Self { store, encrypter }
    }

    /// Creates a personnel account
    ///
    /// # Returns
    /// - `Ok(Personnel)` - The created account
    /// - `Err(AppError::BadRequest)` - Invalid or duplicate PESEL, blank name, or short password
    pub async fn create(&self, param: CreatePersonnelParam) -> Result<Personnel, AppError> {
        validate_pesel(&param.pesel)?;
        validate_names(&param.first_name, &param.last_name)?;
        validate_password(&param.password)?;

        let repo = self.store.personnel();
        if repo.find_by_key(&param.pesel).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Personnel with PESEL {} already exists",
                param.pesel
            )));
        }

        let (password_hash, salt) = self.hash_password(&param.password).await?;
        let personnel = repo
            .create(NewPersonnel {
                pesel: param.pesel,
                first_name: param.first_name,
                last_name: param.last_name,
                password_hash,
                salt,
            })
            .await?;

        tracing::info!("Created personnel account {}", personnel.id);

        Ok(personnel)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Personnel, AppError> {
        self.store
            .personnel()
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list(&self) -> Result<Vec<Personnel>, AppError> {
        Ok(self.store.personnel().list().await?)
    }

    /// Updates names and, when given, the password
    pub async fn update(
        &self,
        id: i32,
        param: UpdatePersonnelParam,
    ) -> Result<Personnel, AppError> {
        validate_names(&param.first_name, &param.last_name)?;
        if let Some(password) = &param.password {
            validate_password(password)?;
        }

        let credentials = match param.password.as_deref() {
            Some(password) => Some(self.hash_password(password).await?),
            None => None,
        };
        let changes = PersonnelChanges {
            first_name: param.first_name,
            last_name: param.last_name,
            credentials,
        };

        self.store
            .personnel()
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes an account that has not recorded any donations
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::NotFound)` - No account with this ID
    /// - `Err(AppError::PersistenceErr(Conflict))` - Donations still reference the account
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let donations = self.store.blood_donations().list().await?;
        if donations.iter().any(|d| d.personnel_id == id) {
            return Err(PersistenceError::Conflict(format!(
                "personnel {} has recorded donations",
                id
            ))
            .into());
        }

        if !self.store.personnel().delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Returns `(password_hash, salt)` for a new password.
    async fn hash_password(&self, password: &str) -> Result<(String, String), AppError> {
        let salt = self.encrypter.generate_salt();
        let hash = self.encrypter.hash_blocking(password, &salt).await?;

        Ok((hash, salt))
    }
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        )));
    }

    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Personnel {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::{
        blood_donation::CreateBloodDonationParam, blood_type::CreateBloodTypeParam,
        donor::CreateDonorParam,
    };
    use chrono::Utc;
    use test_utils::builder::TestBuilder;

    fn create(pesel: &str, password: &str) -> CreatePersonnelParam {
        CreatePersonnelParam {
            pesel: pesel.to_string(),
            first_name: "Ewa".to_string(),
            last_name: "Lis".to_string(),
            password: password.to_string(),
        }
    }

    /// Expected: stored hash verifies against the plaintext, plaintext not stored
    #[tokio::test]
    async fn hashes_password_on_create() -> Result<(), AppError> {
        let store = Store::in_memory();
        let encrypter = Encrypter::new(10);
        let service = PersonnelService::new(&store, &encrypter);

        let personnel = service.create(create("44051401359", "hunter2hunter2")).await?;

        assert_ne!(personnel.password_hash, "hunter2hunter2");
        assert!(encrypter.verify("hunter2hunter2", &personnel.salt, &personnel.password_hash));

        Ok(())
    }

    /// Expected: BadRequest for duplicate PESEL and for short passwords
    #[tokio::test]
    async fn rejects_invalid_accounts() -> Result<(), AppError> {
        let store = Store::in_memory();
        let encrypter = Encrypter::new(10);
        let service = PersonnelService::new(&store, &encrypter);
        service.create(create("44051401359", "password1")).await?;

        assert!(matches!(
            service.create(create("44051401359", "password2")).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.create(create("02070803628", "short")).await,
            Err(AppError::BadRequest(_))
        ));

        Ok(())
    }

    /// Expected: password material kept without a new password, replaced with one
    #[tokio::test]
    async fn update_changes_password_only_when_given() -> Result<(), AppError> {
        let store = Store::in_memory();
        let encrypter = Encrypter::new(10);
        let service = PersonnelService::new(&store, &encrypter);
        let created = service.create(create("44051401359", "password1")).await?;

        let renamed = service
            .update(
                created.id,
                UpdatePersonnelParam {
                    first_name: "Ewelina".to_string(),
                    last_name: "Lis".to_string(),
                    password: None,
                },
            )
            .await?;
        assert_eq!(renamed.first_name, "Ewelina");
        assert_eq!(renamed.password_hash, created.password_hash);

        let rekeyed = service
            .update(
                created.id,
                UpdatePersonnelParam {
                    first_name: "Ewelina".to_string(),
                    last_name: "Lis".to_string(),
                    password: Some("password2".to_string()),
                },
            )
            .await?;
        assert!(encrypter.verify("password2", &rekeyed.salt, &rekeyed.password_hash));
        assert!(!encrypter.verify("password1", &rekeyed.salt, &rekeyed.password_hash));

        Ok(())
    }

    /// Expected: NotFound for a missing account
    #[tokio::test]
    async fn missing_personnel_is_not_found() {
        let store = Store::in_memory();
        let encrypter = Encrypter::new(10);
        let service = PersonnelService::new(&store, &encrypter);

        assert!(matches!(
            service.get_by_id(1).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(service.delete(1).await, Err(AppError::NotFound(_))));
    }

    /// Expected: Err(Conflict) while a donation references the account, on
    /// both backends; the account is kept and can be deleted afterwards
    #[tokio::test]
    async fn delete_blocked_by_recorded_donations() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let stores = [Store::Relational(test.db.unwrap()), Store::in_memory()];
        let encrypter = Encrypter::new(10);

        for store in &stores {
            let service = PersonnelService::new(store, &encrypter);
            let nurse = service.create(create("44051401359", "password1")).await?;

            let blood_type = store
                .blood_types()
                .create(CreateBloodTypeParam {
                    name: "A Rh+".to_string(),
                })
                .await?;
            let donor = store
                .donors()
                .create(CreateDonorParam {
                    pesel: "02070803628".to_string(),
                    first_name: "Anna".to_string(),
                    last_name: "Nowak".to_string(),
                    blood_type_id: blood_type.id,
                    phone_number: "500100200".to_string(),
                    email: None,
                })
                .await?;
            let donation = store
                .blood_donations()
                .create(CreateBloodDonationParam {
                    donor_id: donor.id,
                    personnel_id: nurse.id,
                    donated_at: Utc::now(),
                    volume_ml: 450,
                })
                .await?;

            assert!(matches!(
                service.delete(nurse.id).await,
                Err(AppError::PersistenceErr(PersistenceError::Conflict(_)))
            ));
            assert_eq!(service.get_by_id(nurse.id).await?.id, nurse.id);

            store.blood_donations().delete(donation.id).await?;
            service.delete(nurse.id).await?;
            assert!(matches!(
                service.get_by_id(nurse.id).await,
                Err(AppError::NotFound(_))
            ));
        }

        Ok(())
    }
}
