use crate::server::{
    data::store::Store,
    error::AppError,
    model::donor::{CreateDonorParam, Donor, UpdateDonorParam},
    util::pesel::validate_pesel,
};

/// Donor registration and lookup.
///
/// A donor's PESEL is validated on creation and is unique among donors. The
/// referenced blood type must exist; the in-memory store does not enforce
/// foreign keys, so the check happens here for both backends.
pub struct DonorService<'a> {
    store: &'a Store,
}

impl<'a> DonorService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Registers a new donor
    ///
    /// # Returns
    /// - `Ok(Donor)` - The created donor
    /// - `Err(AppError::BadRequest)` - Invalid or duplicate PESEL, blank name,
    ///   or unknown blood type
    pub async fn create(&self, param: CreateDonorParam) -> Result<Donor, AppError> {
        validate_pesel(&param.pesel)?;
        validate_names(&param.first_name, &param.last_name)?;
        self.ensure_blood_type(param.blood_type_id).await?;

        let repo = self.store.donors();
        if repo.find_by_key(&param.pesel).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Donor with PESEL {} already exists",
                param.pesel
            )));
        }

        let donor = repo.create(param).await?;
        tracing::debug!("Registered donor {}", donor.id);

        Ok(donor)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Donor, AppError> {
        self.store
            .donors()
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Finds a donor by PESEL
    pub async fn get_by_pesel(&self, pesel: &str) -> Result<Donor, AppError> {
        validate_pesel(pesel)?;

        self.store
            .donors()
            .find_by_key(pesel)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Donor with PESEL {} not found", pesel)))
    }

    pub async fn list(&self) -> Result<Vec<Donor>, AppError> {
        Ok(self.store.donors().list().await?)
    }

    pub async fn update(&self, id: i32, param: UpdateDonorParam) -> Result<Donor, AppError> {
        validate_names(&param.first_name, &param.last_name)?;
        self.ensure_blood_type(param.blood_type_id).await?;

        self.store
            .donors()
            .update(id, param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a donor together with their recorded donations
    ///
    /// Either both are removed or neither is.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.store.delete_donor_with_donations(id).await? {
            return Err(not_found(id));
        }
        tracing::debug!("Deleted donor {} and their donations", id);

        Ok(())
    }

    async fn ensure_blood_type(&self, blood_type_id: i32) -> Result<(), AppError> {
        if self
            .store
            .blood_types()
            .get_by_id(blood_type_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Blood type {} does not exist",
                blood_type_id
            )));
        }

        Ok(())
    }
}

pub(super) fn validate_names(first_name: &str, last_name: &str) -> Result<(), AppError> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "First and last name must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Donor {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::blood_type::CreateBloodTypeParam;

    async fn store_with_blood_type() -> (Store, i32) {
        let store = Store::in_memory();
        let blood_type = store
            .blood_types()
            .create(CreateBloodTypeParam {
                name: "0 Rh+".to_string(),
            })
            .await
            .unwrap();

        (store, blood_type.id)
    }

    fn create(pesel: &str, blood_type_id: i32) -> CreateDonorParam {
        CreateDonorParam {
            pesel: pesel.to_string(),
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            blood_type_id,
            phone_number: "500100200".to_string(),
            email: None,
        }
    }

    /// Expected: Ok, then BadRequest for the same PESEL
    #[tokio::test]
    async fn rejects_duplicate_pesel() -> Result<(), AppError> {
        let (store, blood_type_id) = store_with_blood_type().await;
        let service = DonorService::new(&store);

        service.create(create("44051401359", blood_type_id)).await?;
        let result = service.create(create("44051401359", blood_type_id)).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Expected: BadRequest for a PESEL with a bad check digit
    #[tokio::test]
    async fn rejects_invalid_pesel() {
        let (store, blood_type_id) = store_with_blood_type().await;

        let result = DonorService::new(&store)
            .create(create("44051401358", blood_type_id))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(store.donors().list().await.unwrap().is_empty());
    }

    /// Expected: BadRequest when the blood type does not exist
    #[tokio::test]
    async fn rejects_unknown_blood_type() {
        let (store, blood_type_id) = store_with_blood_type().await;

        let result = DonorService::new(&store)
            .create(create("44051401359", blood_type_id + 1))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Expected: lookup by PESEL returns the donor, unknown PESEL is NotFound
    #[tokio::test]
    async fn finds_by_pesel() -> Result<(), AppError> {
        let (store, blood_type_id) = store_with_blood_type().await;
        let service = DonorService::new(&store);
        let donor = service.create(create("02070803628", blood_type_id)).await?;

        assert_eq!(service.get_by_pesel("02070803628").await?, donor);
        assert!(matches!(
            service.get_by_pesel("44051401359").await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    /// Expected: update replaces fields, delete removes, both NotFound afterwards
    #[tokio::test]
    async fn updates_and_deletes() -> Result<(), AppError> {
        let (store, blood_type_id) = store_with_blood_type().await;
        let service = DonorService::new(&store);
        let donor = service.create(create("44051401359", blood_type_id)).await?;

        let updated = service
            .update(
                donor.id,
                UpdateDonorParam {
                    first_name: "Janina".to_string(),
                    last_name: "Kowalska".to_string(),
                    blood_type_id,
                    phone_number: "600600600".to_string(),
                    email: Some("janina@example.com".to_string()),
                },
            )
            .await?;
        assert_eq!(updated.first_name, "Janina");
        assert_eq!(updated.pesel, donor.pesel);

        service.delete(donor.id).await?;

        assert!(matches!(
            service.get_by_id(donor.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(donor.id).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    /// Expected: deleting a donor removes exactly their donations on both
    /// backends; deleting a missing donor removes nothing
    #[tokio::test]
    async fn delete_removes_donations() -> Result<(), AppError> {
        use crate::server::model::{
            blood_donation::CreateBloodDonationParam, personnel::NewPersonnel,
        };
        use test_utils::builder::TestBuilder;

        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let stores = [Store::Relational(test.db.unwrap()), Store::in_memory()];

        for store in &stores {
            let blood_type = store
                .blood_types()
                .create(CreateBloodTypeParam {
                    name: "0 Rh+".to_string(),
                })
                .await?;
            let service = DonorService::new(store);
            let donor = service.create(create("44051401359", blood_type.id)).await?;
            let other = service.create(create("02070803628", blood_type.id)).await?;
            let personnel = store
                .personnel()
                .create(NewPersonnel {
                    pesel: "44051401359".to_string(),
                    first_name: "Ewa".to_string(),
                    last_name: "Lis".to_string(),
                    password_hash: "hash".to_string(),
                    salt: "salt".to_string(),
                })
                .await?;
            for donor_id in [donor.id, donor.id, other.id] {
                store
                    .blood_donations()
                    .create(CreateBloodDonationParam {
                        donor_id,
                        personnel_id: personnel.id,
                        donated_at: chrono::Utc::now(),
                        volume_ml: 450,
                    })
                    .await?;
            }

            assert!(matches!(
                service.delete(other.id + 100).await,
                Err(AppError::NotFound(_))
            ));
            assert_eq!(store.blood_donations().list().await?.len(), 3);

            service.delete(donor.id).await?;

            let remaining = store.blood_donations().list().await?;
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].donor_id, other.id);
            assert!(store.donors().get_by_id(other.id).await?.is_some());
        }

        Ok(())
    }
}
